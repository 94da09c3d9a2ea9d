//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tally_core::db::{Database, TransactionFilter};
use tally_core::models::{NewTransaction, TransactionKind};
use tally_core::money;

use super::truncate;

pub fn cmd_add(
    db: &Database,
    amount: f64,
    category: &str,
    description: &str,
    kind: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let amount_cents = money::cents_from_dollars(amount)?;

    let kind: Option<TransactionKind> = kind
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?,
        None => Utc::now().date_naive(),
    };

    let tx = db.add_transaction(&NewTransaction {
        date,
        amount_cents,
        category: category.to_string(),
        description: description.to_string(),
        kind,
    })?;

    println!(
        "✅ Added {} of {} in {} on {}",
        tx.kind,
        money::format_dollars(tx.amount_cents),
        tx.category,
        tx.date
    );

    Ok(())
}

pub fn cmd_transactions_list(
    db: &Database,
    limit: i64,
    category: Option<&str>,
    month: Option<&str>,
) -> Result<()> {
    let filter = TransactionFilter::new().category(category).month(month);
    let transactions = db.list_transactions(&filter, limit, 0)?;
    let total = db.count_transactions(&filter)?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!("📋 Transactions ({} of {})", transactions.len(), total);
    println!("   ──────────────────────────────────────────────────");
    for tx in &transactions {
        let sign = match tx.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        println!(
            "   [{:>4}] {} {}{:>10}  {:<18} {}",
            tx.id,
            tx.date,
            sign,
            money::format_dollars(tx.amount_cents),
            truncate(&tx.category, 18),
            truncate(&tx.description, 30)
        );
    }

    Ok(())
}
