//! Resolution of a page's complete SEO bundle.

use serde_json::Value;
use tracing::warn;

use crate::i18n::Language;
use crate::routing::{path_for, RouteKey};
use crate::seo::jsonld;
use crate::seo::metadata::SeoCatalog;

/// hreflang value of the fallback alternate.
pub const X_DEFAULT: &str = "x-default";

pub const DEFAULT_ROBOTS: &str = "index, follow, max-image-preview:large";

/// Site-wide values every bundle is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Origin without trailing slash, e.g. `https://mariaangelescapas.com`
    pub site_url: String,
    pub site_name: String,
    /// Fallback share image, relative to the site root
    pub default_image: String,
}

impl SiteSettings {
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for a site path; absolute inputs pass through.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.site_url, path.trim_start_matches('/'))
        }
    }

    pub fn url_for(&self, key: RouteKey, language: Language) -> String {
        format!("{}{}", self.site_url, path_for(key, language))
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: "https://mariaangelescapas.com".to_string(),
            site_name: "María Ángeles Capas".to_string(),
            default_image: "/assets/og/default.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub og_type: String,
    pub locale: String,
    pub site_name: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Everything the document head needs for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoBundle {
    pub route: RouteKey,
    pub language: Language,
    pub title: String,
    pub description: String,
    pub heading: String,
    pub keywords: Vec<String>,
    pub robots: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub json_ld: Vec<Value>,
}

/// Caller overrides for Open Graph fields. Unset fields keep page values.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_type: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
}

/// Caller overrides for the Twitter card. Unset fields keep page values.
#[derive(Debug, Clone, Default)]
pub struct TwitterOverrides {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Explicit per-page overrides.
///
/// Precedence for every field: override, then page metadata, then nothing.
/// `open_graph` and `twitter` inherit the final title/description/canonical
/// when they do not set their own.
#[derive(Debug, Clone, Default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub robots: Option<String>,
    pub open_graph: OpenGraphOverrides,
    pub twitter: TwitterOverrides,
    /// Replaces the generated structured data when set
    pub json_ld: Option<Vec<Value>>,
}

impl SeoCatalog {
    /// Resolve the bundle for a page without overrides.
    pub fn resolve(
        &self,
        site: &SiteSettings,
        key: RouteKey,
        language: Language,
    ) -> Option<SeoBundle> {
        self.resolve_with(site, key, language, &SeoOverrides::default())
    }

    /// Resolve the bundle for a page, applying `overrides`.
    ///
    /// Returns `None` (and logs a warning) when the route has no metadata;
    /// the page then renders without head changes.
    pub fn resolve_with(
        &self,
        site: &SiteSettings,
        key: RouteKey,
        language: Language,
        overrides: &SeoOverrides,
    ) -> Option<SeoBundle> {
        let Some(entry) = self.entry(key, language) else {
            warn!("No SEO metadata for route '{}' ({})", key, language);
            return None;
        };

        let title = overrides
            .title
            .clone()
            .unwrap_or_else(|| entry.title.to_string());
        let description = overrides
            .description
            .clone()
            .unwrap_or_else(|| entry.description.to_string());
        let canonical = overrides
            .canonical
            .clone()
            .unwrap_or_else(|| site.url_for(key, language));

        let page_image = entry
            .image
            .map(|path| site.absolute(path))
            .unwrap_or_else(|| site.absolute(&site.default_image));
        let page_image_alt = entry.image_alt.unwrap_or(entry.heading).to_string();

        let og = &overrides.open_graph;
        let open_graph = OpenGraph {
            title: og.title.clone().unwrap_or_else(|| title.clone()),
            description: og.description.clone().unwrap_or_else(|| description.clone()),
            url: canonical.clone(),
            og_type: og.og_type.clone().unwrap_or_else(|| "website".to_string()),
            locale: language.og_locale().to_string(),
            site_name: site.site_name.clone(),
            image: og
                .image
                .as_deref()
                .map(|img| site.absolute(img))
                .unwrap_or_else(|| page_image.clone()),
            image_alt: og.image_alt.clone().unwrap_or(page_image_alt),
        };

        let tw = &overrides.twitter;
        let twitter = TwitterCard {
            card: tw
                .card
                .clone()
                .unwrap_or_else(|| "summary_large_image".to_string()),
            title: tw.title.clone().unwrap_or_else(|| title.clone()),
            description: tw
                .description
                .clone()
                .unwrap_or_else(|| description.clone()),
            image: tw
                .image
                .as_deref()
                .map(|img| site.absolute(img))
                .unwrap_or_else(|| open_graph.image.clone()),
        };

        let json_ld = match &overrides.json_ld {
            Some(objects) => objects.clone(),
            None => jsonld::for_page(site, key, language, entry, &canonical),
        };

        Some(SeoBundle {
            route: key,
            language,
            title,
            description,
            heading: entry.heading.to_string(),
            keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
            robots: overrides
                .robots
                .clone()
                .unwrap_or_else(|| DEFAULT_ROBOTS.to_string()),
            canonical,
            alternates: alternates(site, key),
            open_graph,
            twitter,
            json_ld,
        })
    }
}

/// One alternate per supported language plus `x-default`, which always
/// points at the default-language URL.
pub fn alternates(site: &SiteSettings, key: RouteKey) -> Vec<Alternate> {
    let mut links: Vec<Alternate> = Language::all()
        .into_iter()
        .map(|lang| Alternate {
            hreflang: lang.code().to_string(),
            href: site.url_for(key, lang),
        })
        .collect();
    links.push(Alternate {
        hreflang: X_DEFAULT.to_string(),
        href: site.url_for(key, Language::default_language()),
    });
    links
}
