//! Single-pass pattern extractors for the structural parts of a page.
//!
//! None of these build a document tree. Each one tolerates partial or broken
//! markup and falls back to an empty value; tags inside comments or scripts
//! can still produce false hits.

use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::model::ImageStats;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

static CANONICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]*rel=["']canonical["'][^>]*href=["']([^"']*)["']"#).unwrap()
});

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static IMG_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img ").unwrap());

static ALT_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)alt=").unwrap());

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta[^>]*charset=["']?([^"'\s>]+)"#).unwrap());

/// Inner text of the first `<title>`, trimmed.
pub fn title(html: &str) -> String {
    first_capture(&TITLE_REGEX, html).trim().to_string()
}

/// `href` of the first `<link rel="canonical">`.
pub fn canonical(html: &str) -> String {
    first_capture(&CANONICAL_REGEX, html).to_string()
}

/// Every `<h1>` in document order with nested tags removed.
pub fn headings(html: &str) -> Vec<String> {
    H1_REGEX
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|inner| TAG_REGEX.replace_all(inner.as_str(), "").trim().to_string())
        .collect()
}

/// `charset` value declared in a `<meta>` tag.
pub fn charset(html: &str) -> String {
    first_capture(&CHARSET_REGEX, html).to_string()
}

pub fn images(html: &str) -> ImageStats {
    ImageStats {
        total: IMG_OPEN_REGEX.find_iter(html).count(),
        missing_alt: count_images_missing_alt(html),
    }
}

/// Counts `<img ...>` tags with no `alt=` before the closing `>`.
///
/// An `<img ` that carries `alt=` only rules out that tag; scanning resumes
/// right after its opening, so an `<img ` nested before the same `>` is still
/// considered. Tags without any closing `>` are not counted.
///
/// Openings that share a `>` reuse its position and the start of the last
/// `alt=` before it, so each run of markup is scanned once.
fn count_images_missing_alt(html: &str) -> usize {
    let mut missing = 0;
    let mut cursor = 0;
    // (closing `>`, start of the last `alt=` before it)
    let mut run: Option<(usize, Option<usize>)> = None;

    while let Some(open) = IMG_OPEN_REGEX.find_at(html, cursor) {
        let attrs_start = open.end();
        let (close, last_alt) = match run {
            Some(cached @ (close, _)) if attrs_start <= close => cached,
            _ => {
                let Some(offset) = html[attrs_start..].find('>') else {
                    break;
                };
                let close = attrs_start + offset;
                let last_alt = ALT_ATTR_REGEX
                    .find_iter(&html[attrs_start..close])
                    .last()
                    .map(|alt| attrs_start + alt.start());
                run = Some((close, last_alt));
                (close, last_alt)
            }
        };

        if last_alt.is_some_and(|alt| alt >= attrs_start) {
            cursor = attrs_start;
        } else {
            missing += 1;
            cursor = close + 1;
        }
    }

    missing
}

fn first_capture<'h>(regex: &Regex, html: &'h str) -> &'h str {
    regex
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map_or("", |value| value.as_str())
}
