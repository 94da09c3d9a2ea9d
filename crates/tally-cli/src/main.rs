//! Tally CLI - Personal finance tracker
//!
//! Usage:
//!   tally init                Initialize database
//!   tally add 85.50 "Food & Dining" -d "Groceries"
//!   tally summary             Show this month's summary
//!   tally alerts              Show budget alerts
//!   tally serve --port 3000   Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Seed => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_seed(&db)
        }
        Commands::Add {
            amount,
            category,
            description,
            kind,
            date,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_add(
                &db,
                amount,
                &category,
                &description,
                kind.as_deref(),
                date.as_deref(),
            )
        }
        Commands::Transactions {
            limit,
            category,
            month,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_transactions_list(&db, limit, category.as_deref(), month.as_deref())
        }
        Commands::Summary { month } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_summary(&db, month.as_deref())
        }
        Commands::Alerts { month } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_alerts(&db, month.as_deref())
        }
        Commands::Report { days } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_report(&db, days)
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_budgets_list(&db, None),
                Some(BudgetsAction::List { month }) => {
                    commands::cmd_budgets_list(&db, month.as_deref())
                }
                Some(BudgetsAction::Set { category, amount }) => {
                    commands::cmd_budgets_set(&db, &category, amount)
                }
            }
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(GoalsAction::List) => commands::cmd_goals_list(&db),
                Some(GoalsAction::Add { name, target, date }) => {
                    commands::cmd_goals_add(&db, &name, target, date.as_deref())
                }
                Some(GoalsAction::Progress { id, amount }) => {
                    commands::cmd_goals_progress(&db, id, amount)
                }
            }
        }
        Commands::Categories => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_categories(&db)
        }
        Commands::Export { output } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_export(&db, output.as_deref())
        }
        Commands::Serve { port, host } => {
            commands::cmd_serve(&cli.db, &host, port, cli.no_encrypt).await
        }
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
    }
}
