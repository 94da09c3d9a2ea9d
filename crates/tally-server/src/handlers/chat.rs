//! Chat assistant handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};

/// Request body for the chat assistant
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat assistant response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat - Ask the finance assistant a question
///
/// Delegates to the configured local LLM with the current month's summary as
/// context. Returns 503 when no AI backend is configured.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("Message cannot be empty"));
    }

    let ai = state.ai.as_ref().ok_or_else(|| {
        AppError::service_unavailable(
            "Chat assistant is not configured (set OLLAMA_HOST to enable it)",
        )
    })?;

    let summary = state.db.get_financial_summary(None)?;
    let response = ai.chat(message, &summary).await?;

    Ok(Json(ChatResponse { response }))
}
