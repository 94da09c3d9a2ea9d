//! Budget command implementations

use anyhow::Result;
use tally_core::db::Database;
use tally_core::money::{cents_from_dollars, format_dollars};

pub fn cmd_budgets_list(db: &Database, month: Option<&str>) -> Result<()> {
    let statuses = db.get_budget_status(month)?;

    if statuses.is_empty() {
        println!("No expense categories found. Run 'tally init' first.");
        return Ok(());
    }

    println!("💰 Budget Status");
    println!("   ──────────────────────────────────────────────────");
    for status in &statuses {
        if status.budgeted_cents > 0 {
            println!(
                "   {:<20} {}/{} ({:.1}%)",
                status.category,
                format_dollars(status.spent_cents),
                format_dollars(status.budgeted_cents),
                status.percentage
            );
        } else {
            println!(
                "   {:<20} {} (unbudgeted)",
                status.category,
                format_dollars(status.spent_cents)
            );
        }
    }

    Ok(())
}

pub fn cmd_budgets_set(db: &Database, category: &str, amount: f64) -> Result<()> {
    let budget_cents = cents_from_dollars(amount)?;
    let updated = db.set_budget(category, budget_cents)?;

    if updated.budget_cents > 0 {
        println!(
            "✅ Budget updated for {}: {}/month",
            updated.name,
            format_dollars(updated.budget_cents)
        );
    } else {
        println!("✅ {} is now unbudgeted (no alerts)", updated.name);
    }

    Ok(())
}
