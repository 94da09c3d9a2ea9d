//! Summary and report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::models::{FinancialSummary, MonthlyChartData, SpendingReportRow};

/// Query parameters for the financial summary
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Calendar month, "YYYY-MM" (defaults to the current month)
    pub month: Option<String>,
}

/// GET /api/financial_summary - Financial summary for a month
pub async fn get_financial_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<FinancialSummary>, AppError> {
    let summary = state.db.get_financial_summary(params.month.as_deref())?;
    Ok(Json(summary))
}

/// Query parameters for the spending chart
#[derive(Debug, Deserialize)]
pub struct SpendingChartQuery {
    /// Number of trailing months to include
    #[serde(default = "default_chart_months")]
    pub months: u32,
}

fn default_chart_months() -> u32 {
    6
}

/// GET /api/spending_chart - Income/expense/net series for recent months
pub async fn get_spending_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpendingChartQuery>,
) -> Result<Json<MonthlyChartData>, AppError> {
    let chart = state.db.get_monthly_chart_data(params.months)?;
    Ok(Json(chart))
}

/// Query parameters for the spending report
#[derive(Debug, Deserialize)]
pub struct SpendingReportQuery {
    /// Trailing window in days
    #[serde(default = "default_report_days")]
    pub days: i64,
}

fn default_report_days() -> i64 {
    30
}

/// GET /api/spending_report - Per-category expense report for a trailing window
pub async fn get_spending_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpendingReportQuery>,
) -> Result<Json<Vec<SpendingReportRow>>, AppError> {
    let report = state.db.get_spending_report(params.days)?;
    Ok(Json(report))
}
