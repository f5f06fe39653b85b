//! Slug resolution in both directions.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::RouteTableError;
use crate::i18n::Language;
use crate::routing::table::{RouteDef, RouteKey, ROUTES};

/// Full site path of a route in a language.
///
/// `/{lang}` for the home route, `/{lang}/{slug}` otherwise.
pub fn path_for(key: RouteKey, language: Language) -> String {
    join_path(language, key.slug(language))
}

/// Like [`path_for`] for a string route id.
///
/// Unknown ids fall back to `/{lang}` instead of failing.
pub fn path_for_id(id: &str, language: Language) -> String {
    match RouteKey::from_id(id) {
        Some(key) => path_for(key, language),
        None => join_path(language, ""),
    }
}

fn join_path(language: Language, slug: &str) -> String {
    if slug.is_empty() {
        format!("/{}", language.code())
    } else {
        format!("/{}/{}", language.code(), slug)
    }
}

/// Route owning `slug` in any language.
///
/// Linear scan in table order; the first row whose slug set contains the
/// slug wins. An empty slug is the home route.
pub fn route_key_for(slug: &str) -> Option<RouteKey> {
    route_key_in(&ROUTES, slug)
}

pub(crate) fn route_key_in(table: &[RouteDef], slug: &str) -> Option<RouteKey> {
    if slug.is_empty() {
        return Some(RouteKey::Home);
    }
    table
        .iter()
        .find(|def| def.slugs.iter().any(|(_, s)| s == slug))
        .map(|def| def.key)
}

/// How a slug requested under a language prefix relates to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugMatch {
    /// The slug is this route's slug in the requested language
    Page(RouteKey),
    /// The slug belongs to this route in another language
    Moved(RouteKey),
    Unknown,
}

/// Resolve `slug` under `language` against the built-in table.
pub fn match_slug(language: Language, slug: &str) -> SlugMatch {
    match SlugIndex::builtin() {
        Ok(index) => match_slug_in(index, &ROUTES, language, slug),
        Err(_) => match_slug_scan(&ROUTES, language, slug),
    }
}

/// Language-scoped lookup first; the cross-language scan only decides
/// between a moved page and an unknown one.
pub(crate) fn match_slug_in(
    index: &SlugIndex,
    table: &[RouteDef],
    language: Language,
    slug: &str,
) -> SlugMatch {
    if let Some(route) = index.lookup(language, slug) {
        return SlugMatch::Page(route);
    }
    match route_key_in(table, slug) {
        Some(route) => SlugMatch::Moved(route),
        None => SlugMatch::Unknown,
    }
}

/// Same answer without an index, for a table the index refused.
fn match_slug_scan(table: &[RouteDef], language: Language, slug: &str) -> SlugMatch {
    if let Some(def) = table.iter().find(|def| def.slugs.get(language) == slug) {
        return SlugMatch::Page(def.key);
    }
    match route_key_in(table, slug) {
        Some(route) => SlugMatch::Moved(route),
        None => SlugMatch::Unknown,
    }
}

static SLUG_INDEX: OnceLock<Result<SlugIndex, RouteTableError>> = OnceLock::new();

/// Precomputed `(language, slug) -> RouteKey` index.
///
/// Unlike [`route_key_for`], construction refuses ambiguous tables.
#[derive(Debug)]
pub struct SlugIndex {
    entries: HashMap<Language, HashMap<&'static str, RouteKey>>,
}

impl SlugIndex {
    /// Index of the built-in table, built on first use.
    pub fn builtin() -> Result<&'static SlugIndex, &'static RouteTableError> {
        SLUG_INDEX.get_or_init(Self::build).as_ref()
    }

    pub fn build() -> Result<Self, RouteTableError> {
        Self::from_table(&ROUTES)
    }

    pub fn from_table(table: &[RouteDef]) -> Result<Self, RouteTableError> {
        let mut entries: HashMap<Language, HashMap<&'static str, RouteKey>> = HashMap::new();
        for def in table {
            for (language, slug) in def.slugs.iter() {
                let slugs = entries.entry(language).or_default();
                if let Some(&first) = slugs.get(slug) {
                    return Err(RouteTableError::DuplicateSlug {
                        language,
                        slug,
                        first,
                        second: def.key,
                    });
                }
                slugs.insert(slug, def.key);
            }
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, language: Language, slug: &str) -> Option<RouteKey> {
        self.entries.get(&language)?.get(slug).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::{ChangeFreq, LocalizedSlug};

    fn row(key: RouteKey, es: &'static str, de: &'static str) -> RouteDef {
        RouteDef {
            key,
            slugs: LocalizedSlug {
                es,
                de,
                fr: key.slug(Language::FRENCH),
                en: key.slug(Language::ENGLISH),
            },
            changefreq: ChangeFreq::Monthly,
            priority: 0.5,
        }
    }

    // ==================== path_for Tests ====================

    #[test]
    fn test_home_collapses_to_language_root() {
        for lang in Language::all() {
            assert_eq!(path_for(RouteKey::Home, lang), format!("/{}", lang));
        }
    }

    #[test]
    fn test_path_for_localized_slug() {
        assert_eq!(
            path_for(RouteKey::BirthCertificate, Language::GERMAN),
            "/de/uebersetzung-geburtsurkunde"
        );
        assert_eq!(path_for(RouteKey::Services, Language::SPANISH), "/es/servicios");
    }

    #[test]
    fn test_path_for_unknown_id_falls_back() {
        assert_eq!(path_for_id("no-such-page", Language::FRENCH), "/fr");
        assert_eq!(path_for_id("pricing", Language::ENGLISH), "/en/pricing");
    }

    // ==================== route_key_for Tests ====================

    #[test]
    fn test_roundtrip_every_route_and_language() {
        for key in RouteKey::ALL {
            for lang in Language::all() {
                assert_eq!(route_key_for(key.slug(lang)), Some(key), "{} / {}", key, lang);
            }
        }
    }

    #[test]
    fn test_empty_slug_is_home() {
        assert_eq!(route_key_for(""), Some(RouteKey::Home));
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(route_key_for("no-such-page"), None);
    }

    #[test]
    fn test_first_match_wins_on_collision() {
        let table = [
            row(RouteKey::Services, "servicios", "leistungen"),
            row(RouteKey::Pricing, "servicios", "preise"),
        ];
        assert_eq!(route_key_in(&table, "servicios"), Some(RouteKey::Services));
    }

    // ==================== SlugIndex Tests ====================

    #[test]
    fn test_builtin_table_has_no_collisions() {
        let index = SlugIndex::build().expect("route table should be unambiguous");
        assert_eq!(index.len(), RouteKey::ALL.len() * Language::all().len());
    }

    #[test]
    fn test_index_is_language_scoped() {
        let index = SlugIndex::build().unwrap();
        assert_eq!(
            index.lookup(Language::ENGLISH, "birth-certificate-translation"),
            Some(RouteKey::BirthCertificate)
        );
        assert_eq!(index.lookup(Language::GERMAN, "birth-certificate-translation"), None);
    }

    #[test]
    fn test_builtin_index_is_shared() {
        let first = SlugIndex::builtin().unwrap();
        let second = SlugIndex::builtin().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    // ==================== match_slug Tests ====================

    #[test]
    fn test_match_slug_builtin() {
        assert_eq!(
            match_slug(Language::GERMAN, "leistungen"),
            SlugMatch::Page(RouteKey::Services)
        );
        assert_eq!(
            match_slug(Language::GERMAN, "servicios"),
            SlugMatch::Moved(RouteKey::Services)
        );
        assert_eq!(match_slug(Language::GERMAN, "nirgendwo"), SlugMatch::Unknown);
    }

    #[test]
    fn test_own_language_slug_wins_over_earlier_row() {
        // Pricing's German slug is Services' Spanish slug.
        let table = [
            row(RouteKey::Services, "servicios", "leistungen"),
            row(RouteKey::Pricing, "precios", "servicios"),
        ];
        let index = SlugIndex::from_table(&table).unwrap();

        assert_eq!(
            match_slug_in(&index, &table, Language::GERMAN, "servicios"),
            SlugMatch::Page(RouteKey::Pricing)
        );
        assert_eq!(
            match_slug_in(&index, &table, Language::SPANISH, "servicios"),
            SlugMatch::Page(RouteKey::Services)
        );
        assert_eq!(
            match_slug_scan(&table, Language::GERMAN, "servicios"),
            SlugMatch::Page(RouteKey::Pricing)
        );
    }

    #[test]
    fn test_index_rejects_collision() {
        let table = [
            row(RouteKey::Services, "servicios", "leistungen"),
            row(RouteKey::Pricing, "servicios", "preise"),
        ];
        let err = SlugIndex::from_table(&table).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicateSlug {
                language: Language::SPANISH,
                slug: "servicios",
                first: RouteKey::Services,
                second: RouteKey::Pricing,
            }
        );
    }
}
