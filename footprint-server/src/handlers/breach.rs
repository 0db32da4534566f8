//! Breach check handler

use axum::{extract::State, Json};
use footprint_core::logic::scan::mask_email;

use crate::models::{BreachCheckBody, BreachResult};
use crate::{AppError, AppResult, AppState};

/// Check an email against known breaches. Reports clean when no
/// breach source is configured or it is unavailable.
pub async fn check(
    State(state): State<AppState>,
    payload: Option<Json<BreachCheckBody>>,
) -> AppResult<Json<BreachResult>> {
    let email = payload
        .and_then(|Json(body)| body.email)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::ValidationError("email required".to_string()))?;

    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::ValidationError("email cannot be empty".to_string()));
    }

    let breaches = match &state.hibp {
        Some(hibp) => hibp.breaches_for(email).await,
        None => {
            tracing::debug!("HIBP_API_KEY not set, reporting {} as clean", mask_email(email));
            Vec::new()
        }
    };

    tracing::info!("Breach check for {}: {} breach(es)", mask_email(email), breaches.len());

    Ok(Json(BreachResult {
        email: email.to_string(),
        breaches,
    }))
}
