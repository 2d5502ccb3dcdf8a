use std::fs;

use crate::extractor::{ImageStats, PageMeta, Report, analyze, extract_meta};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn check(report: &Report, label: &str) -> bool {
    report
        .checks
        .iter()
        .find(|check| check.label == label)
        .map(|check| check.pass)
        .unwrap_or_else(|| panic!("missing check {label}"))
}

#[test]
fn test_optimized_page_scores_full_marks() {
    let report = analyze("https://acme.example.com/widgets", &fixture("optimized.html"));

    assert_eq!(report.url, "https://acme.example.com/widgets");
    assert_eq!(
        report.meta.title,
        "Acme Widgets | Durable Steel Widgets for Every Workshop"
    );
    assert_eq!(report.meta.description.chars().count(), 160);
    assert_eq!(report.meta.canonical, "https://acme.example.com/widgets");
    assert_eq!(report.meta.h1s, vec!["Steel Widgets"]);
    assert_eq!(report.meta.og.title, "Acme Steel Widgets");
    assert_eq!(report.meta.og.kind, "website");
    assert_eq!(report.meta.og.url, "https://acme.example.com/widgets");
    assert_eq!(report.meta.twitter.card, "summary_large_image");
    assert_eq!(
        report.meta.twitter.image,
        "https://acme.example.com/img/widgets-tw.jpg"
    );
    assert_eq!(report.meta.viewport, "width=device-width, initial-scale=1");
    assert_eq!(report.meta.robots, "index, follow");
    assert_eq!(report.meta.charset, "utf-8");
    assert_eq!(
        report.meta.images,
        ImageStats {
            total: 3,
            missing_alt: 0
        }
    );

    assert!(report.checks.iter().all(|check| check.pass));
    assert_eq!(report.score, 100);
}

#[test]
fn test_cluttered_page() {
    let report = analyze("https://example.com/", &fixture("cluttered.html"));

    assert_eq!(report.meta.title, "Home");
    assert_eq!(report.meta.description, "Welcome to our site");
    assert_eq!(report.meta.og.title, "Home &amp; Garden");
    assert_eq!(report.meta.robots, "noindex");
    assert_eq!(report.meta.charset, "windows-1252");
    assert_eq!(report.meta.h1s, vec!["Welcome", "Latest news", "Welcome"]);
    assert_eq!(report.meta.images.total, 3);
    assert_eq!(report.meta.images.missing_alt, 2);

    let failing: Vec<(&str, &str)> = report
        .failed()
        .map(|check| (check.label.as_str(), check.tip.as_str()))
        .collect();
    assert_eq!(
        failing,
        vec![
            ("Title length (50-60 chars)", "Current: 4 chars"),
            ("Description length (150-160)", "Current: 19 chars"),
            ("OG Description", "Add og:description"),
            ("OG Image", "Add og:image for social sharing"),
            ("Twitter Card", "Add twitter:card meta tag"),
            ("Canonical URL", "Add canonical link"),
            ("Single H1", "Found 3 H1 tags"),
            ("Viewport meta", "Add viewport meta for mobile"),
            ("All images have alt", "2 images missing alt"),
        ]
    );
    assert_eq!(report.passed(), 4);
    assert_eq!(report.score, 31);
}

#[test]
fn test_malformed_markup_degrades_to_empty_fields() {
    let report = analyze("https://example.com/broken", &fixture("malformed.html"));

    assert_eq!(report.meta.title, "");
    assert_eq!(report.meta.description, "");
    assert!(report.meta.h1s.is_empty());
    assert_eq!(report.meta.images.total, 1);
    assert_eq!(report.meta.images.missing_alt, 1);
    assert_eq!(report.checks.len(), 13);
    assert_eq!(report.score, 0);
}

#[test]
fn test_minimal_title_only_page() {
    let report = analyze(
        "https://example.com",
        "<html><head><title>Hi</title></head><body></body></html>",
    );

    assert_eq!(report.meta.title, "Hi");
    assert_eq!(report.meta.description, "");
    assert!(report.meta.h1s.is_empty());
    assert_eq!(report.meta.images.total, 0);
    assert!(check(&report, "Title tag"));
    assert!(!check(&report, "Title length (50-60 chars)"));
    // The alt check passes vacuously on a page without images.
    assert!(check(&report, "All images have alt"));
    assert_eq!(report.passed(), 2);
    assert_eq!(report.score, 15);
}

#[test]
fn test_well_formed_widget_page() {
    let description =
        "A page about widgets that is exactly one hundred fifty five characters long ".repeat(3);
    let description = &description[..155];
    let html = format!(
        r#"<html><head>
<meta name="description" content="{description}">
<meta name="viewport" content="width=device-width">
</head><body>
<h1>Widgets</h1>
<img src="a.jpg" alt="a">
</body></html>"#
    );

    let report = analyze("https://example.com/widgets", &html);

    assert_eq!(report.meta.description.len(), 155);
    assert!(check(&report, "Description length (150-160)"));
    assert!(check(&report, "H1 tag present"));
    assert!(check(&report, "Single H1"));
    assert!(check(&report, "All images have alt"));
    assert!(check(&report, "Viewport meta"));
}

#[test]
fn test_two_headings_only_pass_presence() {
    let report = analyze("u", "<h1>One</h1><h1>Two</h1>");
    assert!(check(&report, "H1 tag present"));
    assert!(!check(&report, "Single H1"));
}

#[test]
fn test_empty_input_is_fully_shaped() {
    let report = analyze("", "");
    assert_eq!(report.meta, PageMeta::default());
    assert_eq!(report.checks.len(), 13);
    assert!(report.checks.iter().all(|check| !check.label.is_empty()));
}

#[test]
fn test_extraction_is_idempotent() {
    let html = fixture("cluttered.html");
    assert_eq!(extract_meta(&html), extract_meta(&html));
    assert_eq!(analyze("u", &html), analyze("u", &html));
}

#[test]
fn test_report_json_shape() {
    let report = analyze("https://example.com", &fixture("optimized.html"));
    let json = serde_json::to_value(&report).unwrap();

    for key in [
        "url",
        "title",
        "description",
        "canonical",
        "h1s",
        "og",
        "twitter",
        "viewport",
        "robots",
        "charset",
        "images",
        "checks",
        "score",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert!(json.get("meta").is_none());
    assert_eq!(json["og"]["type"], "website");
    assert_eq!(json["images"]["missingAlt"], 0);
    assert_eq!(json["checks"][0]["label"], "Title tag");
    assert_eq!(json["score"], 100);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_analyze_never_panics(html in ".*", url in "https://[a-z]+\\.com/.*") {
            let report = analyze(&url, &html);
            prop_assert_eq!(report.checks.len(), 13);
            prop_assert!(report.score <= 100);
        }

        #[test]
        fn test_missing_alt_never_exceeds_total(
            tags in proptest::collection::vec("<img [a-z= \"'>]{0,20}", 0..8),
        ) {
            let images = extract_meta(&tags.concat()).images;
            prop_assert!(images.missing_alt <= images.total);
        }

        #[test]
        fn test_title_is_trimmed(inner in "[ \\n\\t]*[A-Za-z0-9][A-Za-z0-9 ]*[ \\n\\t]*") {
            let html = format!("<head><title>{inner}</title></head>");
            prop_assert_eq!(extract_meta(&html).title, inner.trim());
        }

        #[test]
        fn test_analysis_is_idempotent(html in ".*") {
            prop_assert_eq!(analyze("u", &html), analyze("u", &html));
        }
    }
}
