//! schema.org structured data builders.

use serde_json::{json, Value};

use crate::i18n::{Language, LanguageStrings};
use crate::routing::RouteKey;
use crate::seo::metadata::SeoMetadataEntry;
use crate::seo::SiteSettings;

/// Structured data emitted for a page.
///
/// Legal pages carry none; everything else gets one or two objects.
pub fn for_page(
    site: &SiteSettings,
    key: RouteKey,
    language: Language,
    entry: &SeoMetadataEntry,
    canonical: &str,
) -> Vec<Value> {
    match key {
        RouteKey::Home => vec![business(site, language, entry), website(site, language)],
        RouteKey::Services => vec![
            service(site, language, entry, canonical),
            breadcrumbs(site, language, entry, canonical),
        ],
        k if k.is_document_page() => vec![
            service(site, language, entry, canonical),
            breadcrumbs(site, language, entry, canonical),
        ],
        RouteKey::About => vec![
            web_page("AboutPage", language, entry, canonical),
            breadcrumbs(site, language, entry, canonical),
        ],
        RouteKey::Contact => vec![
            web_page("ContactPage", language, entry, canonical),
            breadcrumbs(site, language, entry, canonical),
        ],
        RouteKey::Pricing => vec![
            web_page("WebPage", language, entry, canonical),
            breadcrumbs(site, language, entry, canonical),
        ],
        _ => Vec::new(),
    }
}

fn business(site: &SiteSettings, language: Language, entry: &SeoMetadataEntry) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "@id": format!("{}/#business", site.site_url),
        "name": site.site_name,
        "description": entry.description,
        "url": format!("{}/{}", site.site_url, language.code()),
        "image": site.absolute(&site.default_image),
        "priceRange": "€€",
        "areaServed": { "@type": "Country", "name": "Spain" },
        "address": { "@type": "PostalAddress", "addressCountry": "ES" },
        "knowsLanguage": Language::all().iter().map(|l| l.code()).collect::<Vec<_>>(),
    })
}

fn website(site: &SiteSettings, language: Language) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site.site_name,
        "url": site.site_url,
        "inLanguage": language.code(),
    })
}

fn service(
    site: &SiteSettings,
    language: Language,
    entry: &SeoMetadataEntry,
    canonical: &str,
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": entry.heading,
        "description": entry.description,
        "url": canonical,
        "serviceType": "Sworn translation",
        "inLanguage": language.code(),
        "areaServed": { "@type": "Country", "name": "Spain" },
        "provider": { "@id": format!("{}/#business", site.site_url) },
    })
}

fn web_page(kind: &str, language: Language, entry: &SeoMetadataEntry, canonical: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": kind,
        "name": entry.title,
        "description": entry.description,
        "url": canonical,
        "inLanguage": language.code(),
    })
}

fn breadcrumbs(
    site: &SiteSettings,
    language: Language,
    entry: &SeoMetadataEntry,
    canonical: &str,
) -> Value {
    let home_name = LanguageStrings::for_language(language).nav_home;
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": home_name,
                "item": format!("{}/{}", site.site_url, language.code()),
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": entry.heading,
                "item": canonical,
            },
        ],
    })
}
