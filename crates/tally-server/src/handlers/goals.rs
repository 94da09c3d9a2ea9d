//! Savings goal handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::models::Goal;
use tally_core::money;

/// GET /api/goals - List savings goals with progress
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let goals = state.db.list_goals()?;
    Ok(Json(goals))
}

/// Request body for creating a goal
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub name: String,
    /// Target in dollars
    pub target_amount: f64,
    /// "YYYY-MM-DD"
    pub target_date: Option<String>,
}

/// POST /api/goals - Create a savings goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    let target_cents = money::cents_from_dollars(req.target_amount)?;

    let target_date = req
        .target_date
        .as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .map_err(|_| AppError::bad_request("Invalid target_date format (use YYYY-MM-DD)"))?;

    let id = state.db.add_goal(&req.name, target_cents, target_date)?;
    let goal = state
        .db
        .get_goal(id)?
        .ok_or_else(|| AppError::not_found(&format!("Goal {} not found", id)))?;

    Ok(Json(goal))
}

/// Request body for updating goal progress
#[derive(Debug, Deserialize)]
pub struct GoalProgressRequest {
    /// Amount saved so far, in dollars
    pub current_amount: f64,
}

/// POST /api/goals/:id/progress - Update the saved amount for a goal
pub async fn update_goal_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<GoalProgressRequest>,
) -> Result<Json<Goal>, AppError> {
    let current_cents = money::cents_from_dollars(req.current_amount)?;
    let goal = state.db.update_goal_progress(id, current_cents)?;
    Ok(Json(goal))
}
