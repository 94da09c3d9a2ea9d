//! Category handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::models::TransactionKind;

/// Query parameters for listing categories
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// Filter by kind (income or expense)
    pub kind: Option<String>,
}

/// GET /api/categories - Known category names
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let kind: Option<TransactionKind> = params
        .kind
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let names = state.db.category_names(kind)?;
    Ok(Json(names))
}
