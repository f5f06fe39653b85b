//! Prerender binary - writes a static HTML snapshot of every localized page
//!
//! Usage:
//!   cargo run --bin prerender            # Writes into PRERENDER_OUTPUT_DIR
//!   cargo run --bin prerender -- out     # Writes into ./out
//!
//! Optional:
//! - SITE_URL (defaults to https://mariaangelescapas.com)
//! - PRERENDER_OUTPUT_DIR (defaults to dist)
//! - PRERENDER_CONCURRENCY (defaults to 4)
//!
//! Exits non-zero when any page failed to render.

use anyhow::{bail, Result};
use chrono::Utc;
use std::path::PathBuf;
use sworn_translator_site::{
    config::Config, prerender::prerender_all, routing::RouteTableValidator,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sworn_translator_site=info".parse()?)
                .add_directive("prerender=info".parse()?),
        )
        .init();

    let report = RouteTableValidator::validate();
    for warning in &report.warnings {
        warn!("Route table: {}", warning);
    }
    if report.has_errors() {
        bail!("Route table is invalid: {}", report.errors.join("; "));
    }

    let config = Config::from_env()?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.prerender_output_dir));

    let report = prerender_all(
        &config.site(),
        &out_dir,
        config.prerender_concurrency,
        Utc::now().date_naive(),
    )
    .await?;

    if !report.is_complete() {
        for failure in &report.failed {
            error!(
                "  {} ({}): {}",
                failure.route, failure.language, failure.error
            );
        }
        bail!("{} page(s) failed to prerender", report.failed.len());
    }

    info!("Wrote {} pages to {}", report.written.len(), out_dir.display());
    Ok(())
}
