//! Demo dataset command
//!
//! Loads one month of realistic sample data sized so the budget alert tiers
//! all fire: Food & Dining and Entertainment exceed their budgets (danger),
//! Shopping and Bills & Utilities land in warning, Transportation and
//! Healthcare in info, and Education stays quiet. Everything goes through the
//! same validated store API as real data.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use tally_core::db::Database;
use tally_core::models::NewTransaction;
use tally_core::money::format_dollars;

/// (category, monthly budget in cents)
const DEMO_BUDGETS: &[(&str, i64)] = &[
    ("Food & Dining", 40000),
    ("Transportation", 25000),
    ("Shopping", 15000),
    ("Entertainment", 10000),
    ("Bills & Utilities", 30000),
    ("Healthcare", 8000),
    ("Education", 5000),
];

/// (day of month, cents, category, description)
const DEMO_TRANSACTIONS: &[(u32, i64, &str, &str)] = &[
    // Income
    (1, 450000, "Salary", "Monthly salary"),
    (6, 80000, "Freelance", "Web design project"),
    // Food & Dining (exceeds the $400 budget)
    (2, 6550, "Food & Dining", "Grocery shopping"),
    (4, 3575, "Food & Dining", "Dinner out"),
    (5, 1250, "Food & Dining", "Coffee shop"),
    (7, 4520, "Food & Dining", "Lunch meeting"),
    (9, 7830, "Food & Dining", "Weekend groceries"),
    (11, 2500, "Food & Dining", "Pizza delivery"),
    (13, 5580, "Food & Dining", "Date night dinner"),
    (15, 1890, "Food & Dining", "Morning coffee"),
    (17, 9500, "Food & Dining", "Family dinner"),
    (19, 3240, "Food & Dining", "Quick lunch"),
    // Transportation (info territory on the $250 budget)
    (3, 4500, "Transportation", "Gas fill-up"),
    (6, 2550, "Transportation", "Uber ride"),
    (10, 5000, "Transportation", "Gas station"),
    (12, 1575, "Transportation", "Parking fee"),
    (16, 3500, "Transportation", "Taxi to airport"),
    (18, 2800, "Transportation", "Public transit"),
    // Shopping (warning territory on the $150 budget)
    (8, 8599, "Shopping", "Clothing purchase"),
    (14, 4550, "Shopping", "Online order"),
    // Entertainment (exceeds the $100 budget)
    (5, 6500, "Entertainment", "Concert tickets"),
    (9, 2550, "Entertainment", "Movie night"),
    (13, 3500, "Entertainment", "Streaming services"),
    // Bills & Utilities (warning territory on the $300 budget)
    (2, 12500, "Bills & Utilities", "Electric bill"),
    (7, 8999, "Bills & Utilities", "Internet bill"),
    (11, 4500, "Bills & Utilities", "Water bill"),
    // Healthcare (info territory on the $80 budget)
    (15, 3500, "Healthcare", "Pharmacy"),
    (20, 2500, "Healthcare", "Vitamins"),
];

/// (name, target in cents, target date)
const DEMO_GOALS: &[(&str, i64, Option<&str>)] = &[
    ("Emergency Fund", 1_000_000, Some("2026-12-31")),
    ("Vacation Fund", 300_000, Some("2026-08-15")),
    ("New Laptop", 250_000, Some("2026-09-01")),
];

pub fn cmd_seed(db: &Database) -> Result<()> {
    println!("🎭 Loading demo dataset...");

    db.seed_default_categories()
        .context("Failed to seed default categories")?;

    println!("💰 Setting budgets...");
    for (category, budget_cents) in DEMO_BUDGETS {
        db.set_budget(category, *budget_cents)?;
        println!("   {}: {}", category, format_dollars(*budget_cents));
    }

    let today = Utc::now().date_naive();
    let first_of_month = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();

    println!();
    println!("📊 Adding transactions...");
    let mut count = 0;
    for (day, amount_cents, category, description) in DEMO_TRANSACTIONS {
        let date = first_of_month
            .with_day(*day)
            .unwrap_or(first_of_month);
        db.add_transaction(&NewTransaction {
            date,
            amount_cents: *amount_cents,
            category: category.to_string(),
            description: description.to_string(),
            kind: None,
        })?;
        count += 1;
    }
    println!("   Added {} transactions for {}", count, today.format("%B %Y"));

    println!();
    println!("🎯 Adding goals...");
    for (name, target_cents, target_date) in DEMO_GOALS {
        let date = target_date.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        db.add_goal(name, *target_cents, date)?;
        println!("   {}: {}", name, format_dollars(*target_cents));
    }

    println!();
    println!("✅ Demo data loaded. Try:");
    println!("   tally summary");
    println!("   tally alerts");
    println!("   tally serve");

    Ok(())
}
