//! Profile prediction handler

use axum::Json;

use crate::models::{predict, PredictRequest, Prediction};
use crate::{AppError, AppResult};

pub async fn profile(payload: Option<Json<PredictRequest>>) -> AppResult<Json<Prediction>> {
    let text = payload
        .and_then(|Json(body)| body.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::ValidationError("text required".to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::ValidationError("text cannot be empty".to_string()));
    }

    Ok(Json(predict(text)))
}
