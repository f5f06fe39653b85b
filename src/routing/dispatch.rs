//! Maps an incoming request path to a page render or a redirect.

use crate::i18n::resolver::{self, with_query, ResolveContext};
use crate::i18n::Language;
use crate::routing::slug::{match_slug, path_for, SlugMatch};
use crate::routing::table::RouteKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Render {
        route: RouteKey,
        language: Language,
    },
    Redirect {
        location: String,
        /// Permanent for moved content (legacy and cross-language slugs),
        /// temporary for anything that depends on the visitor.
        permanent: bool,
    },
}

impl Dispatch {
    fn temporary(location: String) -> Self {
        Dispatch::Redirect {
            location,
            permanent: false,
        }
    }

    fn permanent(location: String) -> Self {
        Dispatch::Redirect {
            location,
            permanent: true,
        }
    }
}

/// Decide what to serve for `ctx.path`.
pub fn dispatch(ctx: &ResolveContext<'_>, query: Option<&str>) -> Dispatch {
    let segments: Vec<&str> = ctx.path.split('/').filter(|s| !s.is_empty()).collect();

    let Some(&first) = segments.first() else {
        let language = resolver::resolve(ctx);
        return Dispatch::temporary(with_query(format!("/{}", language.code()), query));
    };

    if let Some(language) = Language::parse(first) {
        return match segments.as_slice() {
            [_] => Dispatch::Render {
                route: RouteKey::Home,
                language,
            },
            [_, slug] => match match_slug(language, slug) {
                SlugMatch::Page(route) => Dispatch::Render { route, language },
                SlugMatch::Moved(route) => {
                    Dispatch::permanent(with_query(path_for(route, language), query))
                }
                SlugMatch::Unknown => {
                    Dispatch::temporary(with_query(path_for(RouteKey::Home, language), query))
                }
            },
            _ => Dispatch::temporary(with_query(path_for(RouteKey::Home, language), query)),
        };
    }

    if let [slug] = segments.as_slice() {
        if let Some(route) = legacy_route(slug) {
            return Dispatch::permanent(with_query(path_for(route, Language::SPANISH), query));
        }
    }

    let language = resolver::resolve_without_path(ctx);
    let location = resolver::correction_for(ctx.path, query, language)
        .unwrap_or_else(|| with_query(path_for(RouteKey::Home, language), query));
    Dispatch::temporary(location)
}

/// Unprefixed Spanish slug from before the language-prefixed URL scheme.
fn legacy_route(slug: &str) -> Option<RouteKey> {
    RouteKey::ALL
        .into_iter()
        .filter(|key| *key != RouteKey::Home)
        .find(|key| key.slug(Language::SPANISH) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str) -> Dispatch {
        dispatch(&ResolveContext::new(path), None)
    }

    fn redirect(location: &str, permanent: bool) -> Dispatch {
        Dispatch::Redirect {
            location: location.to_string(),
            permanent,
        }
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_language_root_renders_home() {
        assert_eq!(
            at("/fr"),
            Dispatch::Render {
                route: RouteKey::Home,
                language: Language::FRENCH
            }
        );
    }

    #[test]
    fn test_localized_slug_renders() {
        assert_eq!(
            at("/de/uebersetzung-geburtsurkunde"),
            Dispatch::Render {
                route: RouteKey::BirthCertificate,
                language: Language::GERMAN
            }
        );
    }

    #[test]
    fn test_every_localized_path_renders() {
        for route in RouteKey::ALL {
            for language in Language::all() {
                assert_eq!(
                    at(&path_for(route, language)),
                    Dispatch::Render { route, language }
                );
            }
        }
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(
            at("/es/servicios/"),
            Dispatch::Render {
                route: RouteKey::Services,
                language: Language::SPANISH
            }
        );
    }

    // ==================== Redirect Tests ====================

    #[test]
    fn test_root_redirects_to_detected_language() {
        assert_eq!(at("/"), redirect("/es", false));
        let ctx = ResolveContext::new("/").with_accept_language("de-DE,de;q=0.9,en;q=0.8");
        assert_eq!(dispatch(&ctx, None), redirect("/de", false));
    }

    #[test]
    fn test_unknown_slug_redirects_to_language_home() {
        assert_eq!(at("/es/no-such-page"), redirect("/es", false));
    }

    #[test]
    fn test_deep_path_redirects_to_language_home() {
        assert_eq!(at("/en/pricing/extra"), redirect("/en", false));
    }

    #[test]
    fn test_foreign_slug_redirects_to_localized_slug() {
        assert_eq!(at("/de/servicios"), redirect("/de/leistungen", true));
    }

    #[test]
    fn test_unsupported_language_segment() {
        assert_eq!(at("/xx/servicios"), redirect("/es/servicios", false));
    }

    #[test]
    fn test_unsupported_language_uses_cookie() {
        let ctx = ResolveContext::new("/it/contacto").with_cookie("preferred_language=fr");
        assert_eq!(dispatch(&ctx, None), redirect("/fr/contacto", false));
    }

    #[test]
    fn test_legacy_spanish_slug() {
        assert_eq!(at("/servicios"), redirect("/es/servicios", true));
        assert_eq!(
            dispatch(&ResolveContext::new("/precios"), Some("ref=old")),
            redirect("/es/precios?ref=old", true)
        );
    }

    #[test]
    fn test_query_preserved() {
        assert_eq!(
            dispatch(&ResolveContext::new("/xx/servicios"), Some("utm_campaign=spring")),
            redirect("/es/servicios?utm_campaign=spring", false)
        );
    }
}
