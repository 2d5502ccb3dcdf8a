//! Plain-text rendering of a [`Report`] for terminals.

use std::fmt::{self, Display, Write};

use crate::extractor::Report;

const HTTPS_PREFIX: &str = "https://";
const EMPTY: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Good,
            50..=79 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Turns user input into a fetchable URL: bare hosts get `https://`.
pub fn normalize_target(input: &str) -> Option<String> {
    let target = input.trim();
    if target.is_empty() {
        None
    } else if target.starts_with("http") {
        Some(target.to_string())
    } else {
        Some(format!("{HTTPS_PREFIX}{target}"))
    }
}

pub fn render(report: &Report) -> String {
    ReportText(report).to_string()
}

struct ReportText<'a>(&'a Report);

impl Display for ReportText<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut impl Write, report: &Report) -> fmt::Result {
    let meta = &report.meta;

    writeln!(out, "SEO report for {}", or_dash(&report.url))?;
    writeln!(
        out,
        "Score: {}/100 ({})",
        report.score,
        Grade::from_score(report.score)
    )?;

    writeln!(out)?;
    writeln!(out, "Checklist")?;
    for check in &report.checks {
        if check.pass {
            writeln!(out, "  ✓ {}", check.label)?;
        } else {
            writeln!(out, "  ✗ {} ({})", check.label, check.tip)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Basic Meta")?;
    writeln!(out, "  Title: {}", or_dash(&meta.title))?;
    writeln!(out, "  Description: {}", or_dash(&meta.description))?;
    writeln!(out, "  Canonical: {}", or_dash(&meta.canonical))?;
    writeln!(out, "  H1: {}", or_dash(&meta.h1s.join(", ")))?;

    writeln!(out)?;
    writeln!(out, "Open Graph")?;
    writeln!(out, "  Title: {}", or_dash(&meta.og.title))?;
    writeln!(out, "  Description: {}", or_dash(&meta.og.description))?;
    writeln!(
        out,
        "  Image: {}",
        if meta.og.image.is_empty() { "no" } else { "yes" }
    )?;
    writeln!(out, "  Type: {}", or_dash(&meta.og.kind))?;

    if !meta.og.image.is_empty() {
        writeln!(out)?;
        writeln!(out, "Social Preview")?;
        writeln!(out, "  {}", meta.og.image)?;
        writeln!(out, "  {}", first_non_empty(&meta.og.title, &meta.title))?;
        writeln!(
            out,
            "  {}",
            first_non_empty(&meta.og.description, &meta.description)
        )?;
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { EMPTY } else { value }
}

fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}
