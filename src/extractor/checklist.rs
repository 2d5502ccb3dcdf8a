use crate::extractor::model::{CheckResult, PageMeta};

pub const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 50..=60;
pub const DESCRIPTION_LENGTH: std::ops::RangeInclusive<usize> = 150..=160;

struct Rule {
    label: &'static str,
    passes: fn(&PageMeta) -> bool,
    tip: fn(&PageMeta) -> String,
}

impl Rule {
    fn apply(&self, meta: &PageMeta) -> CheckResult {
        CheckResult {
            label: self.label.to_string(),
            pass: (self.passes)(meta),
            tip: (self.tip)(meta),
        }
    }
}

pub const TOTAL_CHECKS: usize = 13;

/// The checklist, in reporting order.
static RULES: [Rule; TOTAL_CHECKS] = [
    Rule {
        label: "Title tag",
        passes: |meta| !meta.title.is_empty(),
        tip: |_| "Add a <title> tag".to_string(),
    },
    Rule {
        label: "Title length (50-60 chars)",
        passes: |meta| TITLE_LENGTH.contains(&text_len(&meta.title)),
        tip: |meta| format!("Current: {} chars", text_len(&meta.title)),
    },
    Rule {
        label: "Meta description",
        passes: |meta| !meta.description.is_empty(),
        tip: |_| "Add a meta description".to_string(),
    },
    Rule {
        label: "Description length (150-160)",
        passes: |meta| DESCRIPTION_LENGTH.contains(&text_len(&meta.description)),
        tip: |meta| format!("Current: {} chars", text_len(&meta.description)),
    },
    Rule {
        label: "OG Title",
        passes: |meta| !meta.og.title.is_empty(),
        tip: |_| "Add og:title meta tag".to_string(),
    },
    Rule {
        label: "OG Description",
        passes: |meta| !meta.og.description.is_empty(),
        tip: |_| "Add og:description".to_string(),
    },
    Rule {
        label: "OG Image",
        passes: |meta| !meta.og.image.is_empty(),
        tip: |_| "Add og:image for social sharing".to_string(),
    },
    Rule {
        label: "Twitter Card",
        passes: |meta| !meta.twitter.card.is_empty(),
        tip: |_| "Add twitter:card meta tag".to_string(),
    },
    Rule {
        label: "Canonical URL",
        passes: |meta| !meta.canonical.is_empty(),
        tip: |_| "Add canonical link".to_string(),
    },
    Rule {
        label: "H1 tag present",
        passes: |meta| !meta.h1s.is_empty(),
        tip: |_| "Add an H1 heading".to_string(),
    },
    Rule {
        label: "Single H1",
        passes: |meta| meta.h1s.len() == 1,
        tip: |meta| format!("Found {} H1 tags", meta.h1s.len()),
    },
    Rule {
        label: "Viewport meta",
        passes: |meta| !meta.viewport.is_empty(),
        tip: |_| "Add viewport meta for mobile".to_string(),
    },
    Rule {
        label: "All images have alt",
        passes: |meta| meta.images.missing_alt == 0,
        tip: |meta| format!("{} images missing alt", meta.images.missing_alt),
    },
];

/// Runs every rule against `meta`, in checklist order.
pub fn evaluate(meta: &PageMeta) -> Vec<CheckResult> {
    RULES.iter().map(|rule| rule.apply(meta)).collect()
}

/// `round(100 * passed / total)`, halves rounding up.
pub fn score(checks: &[CheckResult]) -> u8 {
    let total = checks.len();
    if total == 0 {
        return 0;
    }
    let passed = checks.iter().filter(|check| check.pass).count();
    // (200p + t) / 2t == floor(100p/t + 0.5)
    ((200 * passed + total) / (2 * total)) as u8
}

/// Length in UTF-16 code units, so characters outside the BMP count twice.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}
