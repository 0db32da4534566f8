//! Health check handler

use axum::Json;
use footprint_core::logic::service::HealthResponse;

pub const SERVICE_NAME: &str = "whoMi backend";

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: Some(SERVICE_NAME.to_string()),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: Some(chrono::Utc::now().timestamp()),
    })
}
