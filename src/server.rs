//! HTTP surface: localized pages, generated sitemap/robots, the contact
//! endpoint and static assets.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, warn};

use crate::config::Config;
use crate::contact::{self, ContactForm, ContactOutcome};
use crate::error::ContactError;
use crate::i18n::resolver::{self, PREFERENCE_COOKIE};
use crate::i18n::{Language, LanguageStrings, ResolveContext};
use crate::render::render_page;
use crate::routing::{dispatch, Dispatch};
use crate::seo::{SeoCatalog, SiteSettings};
use crate::sitemap::{generate_sitemap, robots_txt};

/// Preference cookie lifetime: one year.
const PREFERENCE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub site: Arc<SiteSettings>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            site: Arc::new(config.site()),
            client: contact::relay_client(&config)?,
            config: Arc::new(config),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/api/contact", post(submit_contact))
        .nest_service("/assets", assets)
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = generate_sitemap(&state.site, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.site),
    )
}

fn resolve_context<'a>(path: &'a str, headers: &'a HeaderMap) -> ResolveContext<'a> {
    let mut ctx = ResolveContext::new(path);
    if let Some(cookie) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        ctx = ctx.with_cookie(cookie);
    }
    if let Some(accept) = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
    {
        ctx = ctx.with_accept_language(accept);
    }
    ctx
}

/// Every other request: resolve the language, then render or redirect.
async fn page(State(state): State<AppState>, method: Method, uri: Uri, headers: HeaderMap) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match dispatch(&resolve_context(uri.path(), &headers), uri.query()) {
        Dispatch::Redirect {
            location,
            permanent,
        } => {
            debug!("Redirecting {} to {} (permanent: {})", uri, location, permanent);
            if permanent {
                Redirect::permanent(&location).into_response()
            } else {
                Redirect::temporary(&location).into_response()
            }
        }
        Dispatch::Render { route, language } => {
            let html = render_page(&state.site, SeoCatalog::builtin(), route, language);
            let cookie = format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                PREFERENCE_COOKIE,
                language.code(),
                PREFERENCE_MAX_AGE
            );
            (
                [
                    (header::SET_COOKIE, cookie),
                    (header::CONTENT_LANGUAGE, language.code().to_string()),
                ],
                Html(html),
            )
                .into_response()
        }
    }
}

/// What the contact form shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactUiState {
    /// `success` or `error`
    pub status: &'static str,
    pub message: &'static str,
    /// Whether the visitor should be offered to send again
    pub retry: bool,
}

/// Map a submission result to a response status and UI state in `language`.
pub fn contact_ui_state(
    result: &Result<ContactOutcome, ContactError>,
    language: Language,
) -> (StatusCode, ContactUiState) {
    let strings = LanguageStrings::for_language(language);
    let error = |message, retry| ContactUiState {
        status: "error",
        message,
        retry,
    };

    match result {
        Ok(ContactOutcome::Sent) => (
            StatusCode::OK,
            ContactUiState {
                status: "success",
                message: strings.contact_success,
                retry: false,
            },
        ),
        Ok(ContactOutcome::Rejected { .. }) => {
            (StatusCode::BAD_GATEWAY, error(strings.contact_rejected, true))
        }
        Ok(ContactOutcome::Unreachable { .. }) => {
            (StatusCode::BAD_GATEWAY, error(strings.contact_unreachable, true))
        }
        Err(ContactError::NotConfigured) => (
            StatusCode::SERVICE_UNAVAILABLE,
            error(strings.contact_unavailable, false),
        ),
        Err(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error(strings.contact_invalid, true),
        ),
    }
}

async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<ContactUiState>) {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            warn!("Malformed contact submission: {}", rejection.body_text());
            let language = resolver::resolve_without_path(&resolve_context("", &headers));
            let strings = LanguageStrings::for_language(language);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactUiState {
                    status: "error",
                    message: strings.contact_invalid,
                    retry: true,
                }),
            );
        }
    };

    let language = form
        .language
        .as_deref()
        .and_then(Language::parse)
        .unwrap_or_else(Language::default_language);

    let result = contact::submit(&state.client, &state.config, &form).await;
    if let Err(e) = &result {
        warn!("Contact submission refused: {}", e);
    }

    let (status, ui) = contact_ui_state(&result, language);
    (status, Json(ui))
}
