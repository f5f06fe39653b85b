//! Sitemap binary - writes sitemap.xml and robots.txt from the route table
//!
//! Usage:
//!   cargo run --bin sitemap              # Writes into PRERENDER_OUTPUT_DIR
//!   cargo run --bin sitemap -- public    # Writes into ./public
//!
//! Optional:
//! - SITE_URL (defaults to https://mariaangelescapas.com)
//! - PRERENDER_OUTPUT_DIR (defaults to dist)

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use sworn_translator_site::{
    config::Config,
    routing::RouteTableValidator,
    sitemap::{generate_sitemap, robots_txt},
};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sworn_translator_site=info".parse()?)
                .add_directive("sitemap=info".parse()?),
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

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let site = config.site();
    let sitemap_path = out_dir.join("sitemap.xml");
    fs::write(&sitemap_path, generate_sitemap(&site, Utc::now().date_naive()))
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;

    let robots_path = out_dir.join("robots.txt");
    fs::write(&robots_path, robots_txt(&site))
        .with_context(|| format!("Failed to write {}", robots_path.display()))?;

    info!(
        "Wrote {} and {}",
        sitemap_path.display(),
        robots_path.display()
    );
    Ok(())
}
