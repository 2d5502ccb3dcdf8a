use std::{collections::HashMap, sync::LazyLock};

use regex::{Regex, escape};
use tracing::debug;

/// Identifiers the extractor looks up on every page.
pub const KNOWN_IDENTIFIERS: [&str; 12] = [
    "description",
    "og:title",
    "og:description",
    "og:image",
    "og:type",
    "og:url",
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "viewport",
    "robots",
];

static KNOWN_PATTERNS: LazyLock<HashMap<&'static str, MetaPatterns>> = LazyLock::new(|| {
    KNOWN_IDENTIFIERS
        .iter()
        .filter_map(|&identifier| {
            MetaPatterns::new(identifier)
                .ok()
                .map(|patterns| (identifier, patterns))
        })
        .collect()
});

/// `content` value of the first `<meta>` whose `name` or `property` equals
/// `identifier` (case-insensitive), or an empty string.
///
/// The identifier-then-content attribute order is tried over the whole
/// document first; only when that finds nothing is content-then-identifier
/// tried. Values are returned raw, without entity decoding.
pub fn meta_content(html: &str, identifier: &str) -> String {
    if let Some(patterns) = KNOWN_PATTERNS.get(identifier) {
        return patterns.first_content(html);
    }

    match MetaPatterns::new(identifier) {
        Ok(patterns) => patterns.first_content(html),
        Err(err) => {
            debug!(identifier, error = %err, "meta pattern failed to compile");
            String::new()
        }
    }
}

struct MetaPatterns {
    name_first: Regex,
    content_first: Regex,
}

impl MetaPatterns {
    fn new(identifier: &str) -> Result<Self, regex::Error> {
        let identifier = escape(identifier);
        let name_first = Regex::new(&format!(
            r#"(?i)<meta[^>]*(?:name|property)=["']{identifier}["'][^>]*content=["']([^"']*)["']"#
        ))?;
        let content_first = Regex::new(&format!(
            r#"(?i)<meta[^>]*content=["']([^"']*)["'][^>]*(?:name|property)=["']{identifier}["']"#
        ))?;
        Ok(Self {
            name_first,
            content_first,
        })
    }

    fn first_content(&self, html: &str) -> String {
        self.name_first
            .captures(html)
            .or_else(|| self.content_first.captures(html))
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str().to_string())
            .unwrap_or_default()
    }
}
