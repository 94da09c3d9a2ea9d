//! Budget and alert handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::alerts::evaluate_budget_alerts;
use tally_core::models::{BudgetAlert, BudgetStatus};
use tally_core::money;

/// Query parameters for budget endpoints
#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    /// Calendar month, "YYYY-MM" (defaults to the current month)
    pub month: Option<String>,
}

/// GET /api/budgets - Budget position of every expense category
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetQuery>,
) -> Result<Json<Vec<BudgetStatus>>, AppError> {
    let statuses = state.db.get_budget_status(params.month.as_deref())?;
    Ok(Json(statuses))
}

/// Request body for updating a category budget
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub category: String,
    /// Monthly budget in dollars; 0 marks the category unbudgeted
    pub amount: f64,
}

/// POST /api/budgets - Set the monthly budget for an expense category
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateBudgetRequest>,
) -> Result<Json<BudgetStatus>, AppError> {
    let budget_cents = money::cents_from_dollars(req.amount)?;
    let category = state.db.set_budget(&req.category, budget_cents)?;

    // Return the updated position for the current month
    let statuses = state.db.get_budget_status(None)?;
    let status = statuses
        .into_iter()
        .find(|s| s.category == category.name)
        .ok_or_else(|| AppError::not_found(&format!("Category not found: {}", category.name)))?;

    Ok(Json(status))
}

/// GET /api/budget_alerts - Budget alerts for a month, most severe first
///
/// Recomputed from current store state on every request; clients poll this.
pub async fn list_budget_alerts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetQuery>,
) -> Result<Json<Vec<BudgetAlert>>, AppError> {
    let summary = state.db.get_financial_summary(params.month.as_deref())?;
    let budgets = state.db.expense_budgets()?;
    let alerts = evaluate_budget_alerts(&summary.expenses_by_category, &budgets);
    Ok(Json(alerts))
}
