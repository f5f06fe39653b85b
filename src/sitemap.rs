//! sitemap.xml and robots.txt generation from the route table.

use chrono::NaiveDate;

use crate::html::escape_html;
use crate::i18n::Language;
use crate::routing::ROUTES;
use crate::seo::{alternates, SiteSettings};

/// Build the sitemap: one `<url>` per (route, language), each listing every
/// language alternate plus `x-default`.
pub fn generate_sitemap(site: &SiteSettings, build_date: NaiveDate) -> String {
    let lastmod = build_date.format("%Y-%m-%d").to_string();
    let languages = Language::all();

    let mut xml = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" ",
        "xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    ));

    for route in ROUTES.iter() {
        let links = alternates(site, route.key);
        for &language in &languages {
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                escape_html(&site.url_for(route.key, language))
            ));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                route.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", route.priority));
            for link in &links {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    link.hreflang,
                    escape_html(&link.href)
                ));
            }
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(site: &SiteSettings) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
        site.absolute("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteKey;

    fn build_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_sitemap_has_entry_per_route_and_language() {
        let xml = generate_sitemap(&SiteSettings::default(), build_date());
        assert_eq!(xml.matches("<url>").count(), 13 * 4);
        assert_eq!(xml.matches("<xhtml:link").count(), 13 * 4 * 5);
        assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
    }

    #[test]
    fn test_sitemap_entry_fields() {
        let site = SiteSettings::default();
        let xml = generate_sitemap(&site, build_date());

        let loc = format!("<loc>{}</loc>", site.url_for(RouteKey::Home, Language::FRENCH));
        let start = xml.find(&loc).unwrap();
        let entry = &xml[start..start + xml[start..].find("</url>").unwrap()];

        assert!(entry.contains("<lastmod>2026-03-14</lastmod>"));
        assert!(entry.contains("<changefreq>weekly</changefreq>"));
        assert!(entry.contains("<priority>1.0</priority>"));
        assert!(entry.contains(&format!(
            "hreflang=\"x-default\" href=\"{}/es\"",
            site.site_url
        )));
    }

    #[test]
    fn test_sitemap_uses_localized_slugs() {
        let xml = generate_sitemap(&SiteSettings::default(), build_date());
        assert!(xml.contains(
            "<loc>https://mariaangelescapas.com/de/uebersetzung-geburtsurkunde</loc>"
        ));
        assert!(xml.contains("<priority>0.3</priority>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt(&SiteSettings::new("https://example.com/"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
        assert!(robots.contains("Disallow: /api/"));
    }
}
