use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Open Graph tags used for link previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total: usize,
    /// Always `<= total`.
    pub missing_alt: usize,
}

/// Everything pulled out of the markup, before scoring.
///
/// Absent tags are represented by empty strings, zero counters and empty
/// lists, so a meta value can never be told apart from one explicitly set to
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// H1 texts in document order, inner tags stripped, duplicates kept.
    pub h1s: Vec<String>,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
    pub viewport: String,
    pub robots: String,
    pub charset: String,
    pub images: ImageStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckResult {
    pub label: String,
    pub pass: bool,
    /// Remediation hint, only meaningful when `pass` is false.
    pub tip: String,
}

/// The SEO analysis of a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub url: String,
    #[serde(flatten)]
    pub meta: PageMeta,
    pub checks: Vec<CheckResult>,
    /// Percentage of passing checks, 0-100.
    pub score: u8,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|check| check.pass).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.pass)
    }
}
