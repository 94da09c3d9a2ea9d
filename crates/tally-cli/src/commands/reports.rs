//! Summary, alert, and report command implementations

use anyhow::Result;
use tally_core::alerts::evaluate_budget_alerts;
use tally_core::db::Database;
use tally_core::models::AlertTier;
use tally_core::money::{dollars, format_dollars};

pub fn cmd_summary(db: &Database, month: Option<&str>) -> Result<()> {
    let summary = db.get_financial_summary(month)?;

    println!("📊 Financial Summary for {}", summary.period);
    println!("   ─────────────────────────────");
    println!("   Income:       {:>12}", format_dollars(summary.total_income_cents));
    println!("   Expenses:     {:>12}", format_dollars(summary.total_expenses_cents));
    println!("   Net:          {:>12}", format_dollars(summary.net_income_cents));
    println!("   Savings rate: {:>11.1}%", summary.savings_rate);

    if !summary.expenses_by_category.is_empty() {
        // Largest first for the terminal view
        let mut by_category: Vec<_> = summary.expenses_by_category.iter().collect();
        by_category.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        println!();
        println!("   Top expenses:");
        for (category, cents) in by_category {
            println!("   - {}: {}", category, format_dollars(*cents));
        }
    }

    Ok(())
}

pub fn cmd_alerts(db: &Database, month: Option<&str>) -> Result<()> {
    let summary = db.get_financial_summary(month)?;
    let budgets = db.expense_budgets()?;
    let alerts = evaluate_budget_alerts(&summary.expenses_by_category, &budgets);

    if alerts.is_empty() {
        println!("✅ No budget alerts for {}. Spending looks good!", summary.period);
        return Ok(());
    }

    println!("🚨 Budget Alerts for {}", summary.period);
    println!("   ─────────────────────────────");
    for alert in &alerts {
        let icon = match alert.tier {
            AlertTier::Danger => "🚨",
            AlertTier::Warning => "⚠️ ",
            AlertTier::Info => "ℹ️ ",
        };
        println!("   {} {}: {}", icon, alert.category, alert.message);
    }

    Ok(())
}

pub fn cmd_report(db: &Database, days: i64) -> Result<()> {
    let report = db.get_spending_report(days)?;

    if report.is_empty() {
        println!("No expenses in the last {} days.", days);
        return Ok(());
    }

    println!("📈 Spending Report (last {} days)", days);
    println!("   ──────────────────────────────────────────────────");
    println!(
        "   {:<20} {:>6} {:>12} {:>10}",
        "Category", "Count", "Total", "Average"
    );
    for row in &report {
        println!(
            "   {:<20} {:>6} {:>12} {:>9.2}",
            super::truncate(&row.category, 20),
            row.transactions,
            format_dollars(row.total_cents),
            row.average
        );
    }

    let total: i64 = report.iter().map(|r| r.total_cents).sum();
    println!("   ──────────────────────────────────────────────────");
    println!("   Total: {} ({:.2}/day)", format_dollars(total), dollars(total) / days as f64);

    Ok(())
}
