//! whoMi Footprint Server
//!
//! Stateless device-scan and breach-check service for the footprint client.
//!
//! # Routes
//!
//! ```text
//! GET  /api/health        liveness
//! POST /api/device-scan   identify the calling device (+ advanced payload)
//! POST /api/breach-check  email -> known breaches (Have I Been Pwned)
//! POST /api/predict       what a short bio gives away
//! ```

mod config;
mod error;
mod handlers;
mod hibp;
mod models;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "footprint_server=debug,tower_http=debug".into()));
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("whoMi Footprint Server starting ({})...", config.environment);

    let hibp = hibp::HibpClient::from_config(&config)?;
    if hibp.is_some() {
        tracing::info!("Breach checks: Have I Been Pwned ({})", config.hibp_api_url);
    } else {
        tracing::warn!("HIBP_API_KEY not set - breach checks will report clean");
    }

    // Build application state
    let state = AppState { hibp };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` without an API key
    pub hibp: Option<hibp::HibpClient>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::check))
        .route("/api/device-scan", post(handlers::device::scan))
        .route("/api/breach-check", post(handlers::breach::check))
        .route("/api/predict", post(handlers::predict::profile))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
