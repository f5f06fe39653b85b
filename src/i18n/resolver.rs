//! Active-language resolution for an incoming navigation.
//!
//! Resolution order: URL prefix, persisted preference cookie,
//! `Accept-Language`, then the registry default.

use crate::i18n::Language;

/// Cookie holding the visitor's last explicitly visited language.
pub const PREFERENCE_COOKIE: &str = "preferred_language";

/// Inputs for one resolution. Everything is borrowed from the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveContext<'a> {
    pub path: &'a str,
    pub cookie_header: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    pub fn with_cookie(mut self, header: &'a str) -> Self {
        self.cookie_header = Some(header);
        self
    }

    pub fn with_accept_language(mut self, header: &'a str) -> Self {
        self.accept_language = Some(header);
        self
    }
}

/// Resolve the active language.
pub fn resolve(ctx: &ResolveContext<'_>) -> Language {
    if let Some(lang) = language_from_path(ctx.path) {
        return lang;
    }
    resolve_without_path(ctx)
}

/// Resolve from the persisted preference and browser language only.
///
/// Used when the URL segment is known to be unsupported and must be
/// replaced.
pub fn resolve_without_path(ctx: &ResolveContext<'_>) -> Language {
    ctx.cookie_header
        .and_then(parse_cookie_preference)
        .or_else(|| ctx.accept_language.and_then(parse_accept_language))
        .unwrap_or_else(Language::default_language)
}

/// Language named by the first path segment, if it is supported.
///
/// Matches `/{lang}` and `/{lang}/...` only; `/esx` is not Spanish.
pub fn language_from_path(path: &str) -> Option<Language> {
    let first = path.trim_start_matches('/').split('/').next()?;
    Language::parse(first)
}

/// Redirect target for a path whose first segment is not a supported
/// language: the remaining sub-path under `resolved`, query preserved.
///
/// Returns `None` when the path is already correctly prefixed.
pub fn correction_for(path: &str, query: Option<&str>, resolved: Language) -> Option<String> {
    if language_from_path(path).is_some() {
        return None;
    }

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    segments.next();
    let rest: Vec<&str> = segments.collect();

    let mut target = format!("/{}", resolved.code());
    if !rest.is_empty() {
        target.push('/');
        target.push_str(&rest.join("/"));
    }
    Some(with_query(target, query))
}

/// Append a raw query string to a path.
pub fn with_query(mut path: String, query: Option<&str>) -> String {
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        path.push('?');
        path.push_str(q);
    }
    path
}

/// Value of the preference cookie, if it names a supported language.
pub fn parse_cookie_preference(header: &str) -> Option<Language> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == PREFERENCE_COOKIE)
        .and_then(|(_, value)| Language::parse(value.trim()))
}

/// Highest-weighted supported language in an `Accept-Language` header.
///
/// Region subtags fall back to their primary tag (`de-AT` -> `de`).
/// Entries with `q=0` are refused, matching RFC 9110.
pub fn parse_accept_language(header: &str) -> Option<Language> {
    let mut entries: Vec<(&str, f64)> = Vec::new();
    for part in header.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let mut segments = part.split(';');
        let tag = segments.next().unwrap_or("").trim();
        let mut q = 1.0_f64;
        for param in segments {
            if let Some(value) = param.trim().strip_prefix("q=") {
                if let Ok(v) = value.parse::<f64>() {
                    q = v;
                }
            }
        }
        if q > 0.0 {
            entries.push((tag, q));
        }
    }

    // Stable sort keeps header order among equal weights.
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    entries.iter().find_map(|(tag, _)| {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        Language::parse(&primary.to_ascii_lowercase())
    })
}
