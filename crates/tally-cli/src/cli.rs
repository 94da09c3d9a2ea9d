//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track income, expenses, budgets, and financial goals
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set TALLY_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default categories
    Init,

    /// Load a demo dataset (one month of sample data that exercises every alert tier)
    Seed,

    /// Record a transaction
    Add {
        /// Dollar amount (non-negative)
        amount: f64,

        /// Category name (see `tally categories`)
        category: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// income or expense (defaults to the category's kind)
        #[arg(short, long)]
        kind: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List recent transactions
    Transactions {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the financial summary for a month
    Summary {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show budget alerts for a month
    Alerts {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending report over a trailing window
    Report {
        /// Window in days
        #[arg(short, long, default_value = "30")]
        days: i64,
    },

    /// Manage category budgets
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Manage savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// List known categories
    Categories,

    /// Export transactions as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show database status (encryption, counts)
    Status,
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// Show budget status for every expense category (default)
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the monthly budget for an expense category (0 = unbudgeted)
    Set {
        /// Category name
        category: String,
        /// Monthly budget in dollars
        amount: f64,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with progress (default)
    List,

    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount in dollars
        target: f64,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Update the amount saved toward a goal
    Progress {
        /// Goal ID
        id: i64,
        /// Amount saved so far, in dollars
        amount: f64,
    },
}
