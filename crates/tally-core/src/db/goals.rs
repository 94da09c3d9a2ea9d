//! Savings goal operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Goal, GoalStatus};

impl Database {
    /// Add a savings goal
    pub fn add_goal(
        &self,
        name: &str,
        target_cents: i64,
        target_date: Option<NaiveDate>,
    ) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData("Goal name is required".to_string()));
        }
        if target_cents <= 0 {
            return Err(Error::InvalidData(
                "Goal target must be positive".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO goals (name, target_cents, target_date) VALUES (?, ?, ?)",
            params![name, target_cents, target_date.map(|d| d.to_string())],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List goals, newest first
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, target_cents, current_cents, target_date, status, created_at
             FROM goals ORDER BY created_at DESC, id DESC",
        )?;

        let goals = stmt
            .query_map([], |row| Self::row_to_goal(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Get a single goal by ID
    pub fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        let conn = self.conn()?;
        let goal = conn
            .query_row(
                "SELECT id, name, target_cents, current_cents, target_date, status, created_at
                 FROM goals WHERE id = ?",
                params![id],
                |row| Self::row_to_goal(row),
            )
            .optional()?;
        Ok(goal)
    }

    /// Update a goal's saved amount; marks it completed when the target is reached
    pub fn update_goal_progress(&self, id: i64, current_cents: i64) -> Result<Goal> {
        if current_cents < 0 {
            return Err(Error::InvalidData(
                "Saved amount must be non-negative".to_string(),
            ));
        }

        let goal = self
            .get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {} not found", id)))?;

        let status = if current_cents >= goal.target_cents {
            GoalStatus::Completed
        } else {
            goal.status
        };

        let conn = self.conn()?;
        conn.execute(
            "UPDATE goals SET current_cents = ?, status = ? WHERE id = ?",
            params![current_cents, status.as_str(), id],
        )?;

        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {} not found", id)))
    }

    /// Helper to convert a row to Goal
    /// Column order: id, name, target_cents, current_cents, target_date, status, created_at
    fn row_to_goal(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        let target_cents: i64 = row.get(2)?;
        let current_cents: i64 = row.get(3)?;
        let target_date_str: Option<String> = row.get(4)?;
        let status_str: String = row.get(5)?;
        let created_at_str: String = row.get(6)?;

        let progress_percent = if target_cents > 0 {
            current_cents as f64 / target_cents as f64 * 100.0
        } else {
            0.0
        };

        Ok(Goal {
            id: row.get(0)?,
            name: row.get(1)?,
            target_cents,
            current_cents,
            target_date: target_date_str
                .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            status: status_str.parse().unwrap_or_default(),
            progress_percent,
            created_at: parse_datetime(&created_at_str),
        })
    }
}
