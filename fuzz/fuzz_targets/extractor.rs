#![no_main]

use libfuzzer_sys::fuzz_target;

use seocheck::extractor::analyze;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // Analysis must never panic and must always produce a fully shaped report
    let report = analyze("https://example.com", &html);
    assert_eq!(report.checks.len(), 13);
    assert!(report.meta.images.missing_alt <= report.meta.images.total);
    assert!(report.score <= 100);
});
