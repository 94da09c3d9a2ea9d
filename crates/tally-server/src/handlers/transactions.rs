//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_PAGE_LIMIT};
use tally_core::db::TransactionFilter;
use tally_core::models::{NewTransaction, Transaction, TransactionKind};
use tally_core::money;

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    /// Filter by category name (exact match)
    pub category: Option<String>,
    /// Filter by kind (income or expense)
    pub kind: Option<String>,
    /// Filter by calendar month, "YYYY-MM"
    pub month: Option<String>,
}

fn default_limit() -> i64 {
    50
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub transactions: Vec<Transaction>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GET /api/transactions - List transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Result<Json<TransactionResponse>, AppError> {
    // Input validation: clamp pagination parameters
    let limit = params.limit.max(1).min(MAX_PAGE_LIMIT);
    let offset = params.offset.max(0);

    let kind: Option<TransactionKind> = params
        .kind
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let filter = TransactionFilter::new()
        .category(params.category.as_deref())
        .kind(kind)
        .month(params.month.as_deref());

    let transactions = state.db.list_transactions(&filter, limit, offset)?;
    let total = state.db.count_transactions(&filter)?;

    Ok(Json(TransactionResponse {
        transactions,
        total,
        limit,
        offset,
    }))
}

/// Request body for adding a transaction
#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    /// Dollar amount (non-negative magnitude)
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// income or expense; defaults to the category's kind
    pub kind: Option<String>,
    /// "YYYY-MM-DD"; defaults to today
    pub date: Option<String>,
}

/// POST /api/add_transaction - Record a transaction
pub async fn add_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let amount_cents = money::cents_from_dollars(req.amount)?;

    let kind: Option<TransactionKind> = req
        .kind
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let date = match req.date.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("Invalid date format (use YYYY-MM-DD)"))?,
        None => Utc::now().date_naive(),
    };

    let created = state.db.add_transaction(&NewTransaction {
        date,
        amount_cents,
        category: req.category,
        description: req.description,
        kind,
    })?;

    Ok(Json(created))
}
