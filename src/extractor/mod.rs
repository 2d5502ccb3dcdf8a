pub mod checklist;
pub mod meta;
pub mod model;
pub mod structure;

#[cfg(test)]
mod tests;

pub use model::{CheckResult, ImageStats, OpenGraph, PageMeta, Report, TwitterCard};

use tracing::{debug, instrument};

use crate::extractor::meta::meta_content;

/// Pulls every SEO field out of raw markup.
///
/// Never fails: garbage or empty input produces a `PageMeta` full of empty
/// values.
pub fn extract_meta(html: &str) -> PageMeta {
    PageMeta {
        title: structure::title(html),
        description: meta_content(html, "description"),
        canonical: structure::canonical(html),
        h1s: structure::headings(html),
        og: OpenGraph {
            title: meta_content(html, "og:title"),
            description: meta_content(html, "og:description"),
            image: meta_content(html, "og:image"),
            kind: meta_content(html, "og:type"),
            url: meta_content(html, "og:url"),
        },
        twitter: TwitterCard {
            card: meta_content(html, "twitter:card"),
            title: meta_content(html, "twitter:title"),
            description: meta_content(html, "twitter:description"),
            image: meta_content(html, "twitter:image"),
        },
        viewport: meta_content(html, "viewport"),
        robots: meta_content(html, "robots"),
        charset: structure::charset(html),
        images: structure::images(html),
    }
}

/// Extracts and scores `html`, echoing `url` into the report.
#[instrument(skip_all, fields(url = %url))]
pub fn analyze(url: &str, html: &str) -> Report {
    let meta = extract_meta(html);
    let checks = checklist::evaluate(&meta);
    let score = checklist::score(&checks);

    debug!(
        score,
        passed = checks.iter().filter(|check| check.pass).count(),
        total = checks.len(),
        "page scored"
    );

    Report {
        url: url.to_string(),
        meta,
        checks,
        score,
    }
}
