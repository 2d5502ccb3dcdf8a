use std::process::ExitCode;

use anyhow::Context;
use seocheck::{
    config::Config,
    extractor,
    fetcher::{HttpFetcher, PageFetcher},
    presenter, telemetry,
};
use tracing::error;

const USAGE: &str = "usage: check <url>";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format());

    let Some(target) = std::env::args()
        .nth(1)
        .as_deref()
        .and_then(presenter::normalize_target)
    else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let fetcher = HttpFetcher::new(config.fetch()).context("Failed to build HTTP client")?;
    let page = match fetcher.fetch(&target).await {
        Ok(page) => page,
        Err(err) => {
            error!(url = %target, error = %err, "fetch failed");
            eprintln!("Failed to fetch URL: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = extractor::analyze(&target, &page.body_utf8);
    print!("{}", presenter::render(&report));
    println!(
        "\nFetched {} (HTTP {}) at {}",
        page.url_final,
        page.status,
        page.fetched_at.to_rfc3339()
    );

    Ok(ExitCode::SUCCESS)
}
