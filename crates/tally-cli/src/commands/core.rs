//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::{Database, TransactionFilter};

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path.to_str().context("Database path must be valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    db.seed_default_categories()
        .context("Failed to seed default categories")?;
    println!("   Seeded default categories");

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a transaction: tally add 85.50 \"Food & Dining\" -d \"Groceries\"");
    println!("  2. Start web UI: tally serve");

    Ok(())
}

pub fn cmd_categories(db: &Database) -> Result<()> {
    use tally_core::models::TransactionKind;
    use tally_core::money::format_dollars;

    let categories = db.list_categories(None)?;

    println!("📁 Categories");
    println!("   ─────────────────────────────");
    for category in &categories {
        let budget = if category.kind == TransactionKind::Expense && category.budget_cents > 0 {
            format!(" (budget {}/month)", format_dollars(category.budget_cents))
        } else {
            String::new()
        };
        println!("   {:<20} {}{}", category.name, category.kind, budget);
    }

    Ok(())
}

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    let tx_count = db.count_transactions(&TransactionFilter::new())?;
    let categories = db.list_categories(None)?;
    let goals = db.list_goals()?;
    let encrypted = db.is_encrypted()?;

    println!("📊 Tally Status");
    println!("   ─────────────────────────────");
    println!("   Database: {}", db.path());
    println!(
        "   Encryption: {}",
        if encrypted { "🔒 enabled" } else { "⚠️  disabled" }
    );
    println!("   Transactions: {}", tx_count);
    println!("   Categories: {}", categories.len());
    println!("   Goals: {}", goals.len());

    Ok(())
}
