//! Savings goal command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::db::Database;
use tally_core::models::GoalStatus;
use tally_core::money::{cents_from_dollars, format_dollars};

pub fn cmd_goals_list(db: &Database) -> Result<()> {
    let goals = db.list_goals()?;

    if goals.is_empty() {
        println!("No goals yet. Add one: tally goals add \"Emergency Fund\" 10000");
        return Ok(());
    }

    println!("🎯 Savings Goals");
    println!("   ──────────────────────────────────────────────────");
    for goal in &goals {
        let status = match goal.status {
            GoalStatus::Completed => " ✅",
            GoalStatus::Paused => " ⏸",
            GoalStatus::Active => "",
        };
        let deadline = goal
            .target_date
            .map(|d| format!(" by {}", d))
            .unwrap_or_default();
        println!(
            "   [{:>3}] {}: {}/{} ({:.1}%){}{}",
            goal.id,
            goal.name,
            format_dollars(goal.current_cents),
            format_dollars(goal.target_cents),
            goal.progress_percent,
            deadline,
            status
        );
    }

    Ok(())
}

pub fn cmd_goals_add(db: &Database, name: &str, target: f64, date: Option<&str>) -> Result<()> {
    let target_cents = cents_from_dollars(target)?;
    let target_date = date
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .context("Invalid --date format (use YYYY-MM-DD)")?;

    let id = db.add_goal(name, target_cents, target_date)?;
    println!(
        "✅ Added goal [{}]: {} ({})",
        id,
        name,
        format_dollars(target_cents)
    );

    Ok(())
}

pub fn cmd_goals_progress(db: &Database, id: i64, amount: f64) -> Result<()> {
    let current_cents = cents_from_dollars(amount)?;
    let goal = db.update_goal_progress(id, current_cents)?;

    if goal.status == GoalStatus::Completed {
        println!("🎉 Goal '{}' completed!", goal.name);
    } else {
        println!(
            "✅ {}: {}/{} ({:.1}%)",
            goal.name,
            format_dollars(goal.current_cents),
            format_dollars(goal.target_cents),
            goal.progress_percent
        );
    }

    Ok(())
}
