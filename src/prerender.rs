//! Static snapshot generation: one HTML file per (route, language).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::i18n::Language;
use crate::render::render_page;
use crate::routing::RouteKey;
use crate::seo::{SeoCatalog, SiteSettings};
use crate::sitemap::{generate_sitemap, robots_txt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderFailure {
    pub route: RouteKey,
    pub language: Language,
    pub error: String,
}

/// Outcome of a prerender run.
#[derive(Debug, Default)]
pub struct PrerenderReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PrerenderFailure>,
}

impl PrerenderReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Location of a page relative to the output directory:
/// `{lang}/index.html` for home, `{lang}/{slug}/index.html` otherwise.
pub fn output_path(key: RouteKey, language: Language) -> PathBuf {
    let mut path = PathBuf::from(language.code());
    let slug = key.slug(language);
    if !slug.is_empty() {
        path.push(slug);
    }
    path.push("index.html");
    path
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Render every page into `out_dir` with at most `concurrency` writes in
/// flight, then write `sitemap.xml` and `robots.txt` next to them.
///
/// A page that fails is logged and recorded in the report; the rest of the
/// batch still runs.
pub async fn prerender_all(
    site: &SiteSettings,
    out_dir: &Path,
    concurrency: usize,
    build_date: NaiveDate,
) -> Result<PrerenderReport> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let catalog = SeoCatalog::builtin();
    let jobs: Vec<(RouteKey, Language)> = RouteKey::ALL
        .into_iter()
        .flat_map(|key| Language::all().into_iter().map(move |lang| (key, lang)))
        .collect();

    info!(
        "Prerendering {} pages into {} (concurrency {})",
        jobs.len(),
        out_dir.display(),
        concurrency
    );

    let results: Vec<_> = stream::iter(jobs)
        .map(|(key, language)| async move {
            let html = render_page(site, catalog, key, language);
            let path = out_dir.join(output_path(key, language));
            let result = write_file(&path, &html).await.map(|_| path);
            (key, language, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut report = PrerenderReport::default();
    for (route, language, result) in results {
        match result {
            Ok(path) => report.written.push(path),
            Err(e) => {
                error!("Failed to prerender '{}' ({}): {:#}", route, language, e);
                report.failed.push(PrerenderFailure {
                    route,
                    language,
                    error: format!("{:#}", e),
                });
            }
        }
    }
    report.written.sort();

    write_file(&out_dir.join("sitemap.xml"), &generate_sitemap(site, build_date)).await?;
    write_file(&out_dir.join("robots.txt"), &robots_txt(site)).await?;

    info!(
        "Prerender finished: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    Ok(report)
}
