//! Route table validation.
//!
//! Run by the sitemap and prerender binaries before generating anything, so
//! an ambiguous or malformed slug fails the build instead of silently
//! resolving to the first matching route at runtime.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::i18n::Language;
use crate::routing::table::{RouteDef, RouteKey, ROUTES};

/// Validation report containing errors and warnings about the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make routing ambiguous or produce invalid URLs
    pub errors: Vec<String>,

    /// Suspicious but routable entries
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the localized route table.
pub struct RouteTableValidator;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

impl RouteTableValidator {
    /// Validate the built-in route table.
    pub fn validate() -> ValidationReport {
        Self::validate_table(&ROUTES)
    }

    /// Validate an arbitrary table.
    ///
    /// Checks that:
    /// - slugs are lowercase ASCII words joined by single hyphens
    /// - only the home route has an empty slug
    /// - no two routes share a slug within one language
    /// - no two routes share a slug across languages
    /// - a route does not reuse one slug across languages (warning only)
    pub fn validate_table(table: &[RouteDef]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut owners: HashMap<(Language, &str), RouteKey> = HashMap::new();
        let mut first_use: HashMap<&str, (RouteKey, Language)> = HashMap::new();

        for def in table {
            for (language, slug) in def.slugs.iter() {
                if slug.is_empty() {
                    if def.key != RouteKey::Home {
                        report
                            .errors
                            .push(format!("Route '{}' has an empty {} slug", def.key, language));
                    }
                } else if !Self::is_valid_slug(slug) {
                    report.errors.push(format!(
                        "Route '{}' has malformed {} slug '{}'",
                        def.key, language, slug
                    ));
                }

                if let Some(first) = owners.insert((language, slug), def.key) {
                    report.errors.push(format!(
                        "Slug '{}' ({}) is used by both '{}' and '{}'",
                        slug, language, first, def.key
                    ));
                }

                if slug.is_empty() {
                    continue;
                }
                match first_use.get(slug) {
                    Some(&(other_key, other_lang))
                        if other_key != def.key && other_lang != language =>
                    {
                        report.errors.push(format!(
                            "Slug '{}' is used by '{}' ({}) and '{}' ({})",
                            slug, other_key, other_lang, def.key, language
                        ));
                    }
                    Some(_) => {}
                    None => {
                        first_use.insert(slug, (def.key, language));
                    }
                }
            }

            let mut seen: Vec<(&str, Language)> = Vec::new();
            for (language, slug) in def.slugs.iter() {
                if slug.is_empty() {
                    continue;
                }
                if let Some((_, other)) = seen.iter().find(|(s, _)| *s == slug) {
                    report.warnings.push(format!(
                        "Route '{}' uses slug '{}' for both {} and {}",
                        def.key, slug, other, language
                    ));
                }
                seen.push((slug, language));
            }
        }

        report
    }

    fn is_valid_slug(slug: &str) -> bool {
        let regex = SLUG_REGEX
            .get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));
        regex.is_match(slug)
    }
}
