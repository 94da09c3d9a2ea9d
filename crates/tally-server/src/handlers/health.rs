//! Health check handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a chat assistant backend is configured
    pub ai_configured: bool,
}

/// GET /api/health - Service health
pub async fn get_health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, AppError> {
    // Touch the store so a broken database surfaces as a 500 here
    state.db.count_transactions(&Default::default())?;

    Ok(Json(HealthResponse {
        status: "ok",
        ai_configured: state.ai.is_some(),
    }))
}
