//! Integration tests for the localized site
//!
//! These tests drive the full axum router in-process and verify the
//! interaction between dispatch, rendering, the SEO head, the contact relay
//! and the prerenderer.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use sworn_translator_site::{
    config::Config,
    i18n::{Language, LanguageStrings},
    prerender::{output_path, prerender_all},
    routing::{path_for, RouteKey},
    server::{build_router, AppState},
};

// ==================== Test Helpers ====================

/// Create a test config pointing at a mock relay and a temporary assets dir
fn create_test_config(relay_url: &str, access_key: Option<&str>, temp_dir: &TempDir) -> Config {
    let assets_dir = temp_dir.path().join("public");
    std::fs::create_dir_all(&assets_dir).expect("Failed to create assets dir");
    std::fs::write(assets_dir.join("site.css"), "body { margin: 0; }")
        .expect("Failed to write stylesheet");

    Config {
        site_url: "https://mariaangelescapas.com".to_string(),
        site_name: "María Ángeles Capas".to_string(),
        port: 0,
        assets_dir: assets_dir.to_string_lossy().to_string(),
        form_relay_url: relay_url.to_string(),
        form_relay_access_key: access_key.map(str::to_string),
        form_relay_timeout_secs: 2,
        prerender_output_dir: temp_dir.path().join("dist").to_string_lossy().to_string(),
        prerender_concurrency: 4,
    }
}

fn create_app(temp_dir: &TempDir) -> Router {
    build_router(
        AppState::new(create_test_config("http://127.0.0.1:9/submit", None, temp_dir)).unwrap(),
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// ==================== Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_language() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es");
}

#[tokio::test]
async fn test_root_redirect_follows_browser_language() {
    let temp_dir = TempDir::new().unwrap();
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, "de-AT,de;q=0.9,en;q=0.5")
        .body(Body::empty())
        .unwrap();
    let response = create_app(&temp_dir).oneshot(request).await.unwrap();

    assert_eq!(location(&response), "/de");
}

#[tokio::test]
async fn test_preference_cookie_beats_browser_language() {
    let temp_dir = TempDir::new().unwrap();
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "theme=dark; preferred_language=fr")
        .header(header::ACCEPT_LANGUAGE, "de")
        .body(Body::empty())
        .unwrap();
    let response = create_app(&temp_dir).oneshot(request).await.unwrap();

    assert_eq!(location(&response), "/fr");
}

#[tokio::test]
async fn test_unsupported_language_prefix_is_corrected() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir)
        .oneshot(get("/xx/servicios?utm_source=ads"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/servicios?utm_source=ads");
}

#[tokio::test]
async fn test_legacy_and_cross_language_slugs_redirect_permanently() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_app(&temp_dir);

    let response = app.clone().oneshot(get("/precios")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), "/es/precios");

    let response = app.oneshot(get("/en/servicios")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), "/en/services");
}

#[tokio::test]
async fn test_unknown_slug_redirects_to_language_home() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir)
        .oneshot(get("/fr/nowhere"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/fr");
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_german_birth_certificate_page() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir)
        .oneshot(get("/de/uebersetzung-geburtsurkunde"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "de");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("preferred_language=de;"));

    let html = body_string(response).await;
    assert!(html.contains("<html lang=\"de\">"));
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://mariaangelescapas.com/de/uebersetzung-geburtsurkunde\">"
    ));
    for (code, href) in [
        ("es", "https://mariaangelescapas.com/es/traduccion-certificado-nacimiento"),
        ("de", "https://mariaangelescapas.com/de/uebersetzung-geburtsurkunde"),
        ("fr", "https://mariaangelescapas.com/fr/traduction-acte-de-naissance"),
        ("en", "https://mariaangelescapas.com/en/birth-certificate-translation"),
        ("x-default", "https://mariaangelescapas.com/es/traduccion-certificado-nacimiento"),
    ] {
        assert!(
            html.contains(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                code, href
            )),
            "missing alternate {}",
            code
        );
    }
    assert!(html.contains("<meta property=\"og:locale\" content=\"de_DE\">"));
    assert_eq!(html.matches("application/ld+json").count(), 2);
}

#[tokio::test]
async fn test_every_route_renders_in_every_language() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_app(&temp_dir);

    for key in RouteKey::ALL {
        for language in Language::all() {
            let uri = path_for(key, language);
            let response = app.clone().oneshot(get(&uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);

            let html = body_string(response).await;
            assert_eq!(html.matches("rel=\"canonical\"").count(), 1, "{}", uri);
            assert_eq!(
                html.matches("<link rel=\"alternate\" hreflang=").count(),
                5,
                "{}",
                uri
            );
        }
    }
}

#[tokio::test]
async fn test_non_get_page_request_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/es")
        .body(Body::empty())
        .unwrap();
    let response = create_app(&temp_dir).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ==================== Generated Files Tests ====================

#[tokio::test]
async fn test_health_sitemap_and_robots() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_app(&temp_dir);

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(body_string(response).await, "OK");

    let response = app.clone().oneshot(get("/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    let xml = body_string(response).await;
    assert_eq!(xml.matches("<url>").count(), 52);

    let response = app.oneshot(get("/robots.txt")).await.unwrap();
    let robots = body_string(response).await;
    assert!(robots.contains("Sitemap: https://mariaangelescapas.com/sitemap.xml"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir)
        .oneshot(get("/assets/site.css"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body { margin: 0; }");
}

// ==================== Contact Tests ====================

fn contact_request(language: &str) -> Request<Body> {
    let body = serde_json::json!({
        "name": "Jean Dupont",
        "email": "jean@example.fr",
        "document_type": "marriage-certificate",
        "message": "Traduction assermentée vers l'espagnol.",
        "language": language,
    });
    Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_contact_relayed_once() {
    let temp_dir = TempDir::new().unwrap();
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Email sent successfully!"
        })))
        .expect(1)
        .mount(&relay)
        .await;

    let config = create_test_config(&format!("{}/submit", relay.uri()), Some("key"), &temp_dir);
    let response = build_router(AppState::new(config).unwrap())
        .oneshot(contact_request("fr"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(state["status"], "success");
    assert_eq!(state["retry"], false);
}

#[tokio::test]
async fn test_contact_relay_failure_is_not_retried() {
    let temp_dir = TempDir::new().unwrap();
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&relay)
        .await;

    let config = create_test_config(&relay.uri(), Some("key"), &temp_dir);
    let response = build_router(AppState::new(config).unwrap())
        .oneshot(contact_request("en"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(state["status"], "error");
    assert_eq!(state["retry"], true);
}

#[tokio::test]
async fn test_contact_without_access_key() {
    let temp_dir = TempDir::new().unwrap();
    let response = create_app(&temp_dir)
        .oneshot(contact_request("de"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(state["retry"], false);
}

#[tokio::test]
async fn test_malformed_contact_body_gets_localized_state() {
    let temp_dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9")
        .body(Body::from(r#"{"name": "Jean"#))
        .unwrap();
    let response = create_app(&temp_dir).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(state["status"], "error");
    assert_eq!(state["retry"], true);
    assert_eq!(
        state["message"],
        LanguageStrings::for_language(Language::FRENCH).contact_invalid
    );
}

#[tokio::test]
async fn test_incomplete_contact_body_gets_localized_state() {
    let temp_dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "Jean Dupont"}"#))
        .unwrap();
    let response = create_app(&temp_dir).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        state["message"],
        LanguageStrings::for_language(Language::SPANISH).contact_invalid
    );
}

#[tokio::test]
async fn test_stalled_relay_ends_in_retryable_state() {
    let temp_dir = TempDir::new().unwrap();
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true }))
                .set_delay(std::time::Duration::from_secs(10)),
        )
        .mount(&relay)
        .await;

    let config = create_test_config(&relay.uri(), Some("key"), &temp_dir);
    let response = build_router(AppState::new(config).unwrap())
        .oneshot(contact_request("de"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        state["message"],
        LanguageStrings::for_language(Language::GERMAN).contact_unreachable
    );
    assert_eq!(state["retry"], true);
}

// ==================== Prerender Tests ====================

#[tokio::test]
async fn test_prerendered_page_matches_served_page() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9/submit", None, &temp_dir);
    let out_dir = temp_dir.path().join("dist");

    let report = prerender_all(
        &config.site(),
        &out_dir,
        config.prerender_concurrency,
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
    )
    .await
    .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.written.len(), 52);

    let file = out_dir.join(output_path(RouteKey::BirthCertificate, Language::GERMAN));
    assert!(file.ends_with("de/uebersetzung-geburtsurkunde/index.html"));
    let prerendered = std::fs::read_to_string(file).unwrap();

    let response = build_router(AppState::new(config).unwrap())
        .oneshot(get("/de/uebersetzung-geburtsurkunde"))
        .await
        .unwrap();
    assert_eq!(body_string(response).await, prerendered);

    let sitemap = std::fs::read_to_string(out_dir.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<lastmod>2026-05-01</lastmod>"));
}
