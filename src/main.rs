use anyhow::{bail, Result};
use std::net::SocketAddr;
use sworn_translator_site::{
    config::Config,
    routing::RouteTableValidator,
    server::{build_router, AppState},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sworn_translator_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let report = RouteTableValidator::validate();
    for warning in &report.warnings {
        warn!("Route table: {}", warning);
    }
    if report.has_errors() {
        bail!("Route table is invalid: {}", report.errors.join("; "));
    }

    // Load configuration from environment
    let config = Config::from_env()?;
    if config.form_relay_access_key.is_none() {
        warn!("FORM_RELAY_ACCESS_KEY is not set; the contact form will answer 503");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Serving {} on {}", config.site_url, addr);

    let app = build_router(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
