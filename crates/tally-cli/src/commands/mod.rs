//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, status) and shared utilities (open_db)
//! - `budgets` - Budget management commands (list, set)
//! - `export` - CSV export command
//! - `goals` - Savings goal commands (list, add, progress)
//! - `reports` - Summary, alerts, and spending report commands
//! - `seed` - Demo dataset command
//! - `serve` - Web server command
//! - `transactions` - Transaction commands (add, list)

pub mod budgets;
pub mod core;
pub mod export;
pub mod goals;
pub mod reports;
pub mod seed;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use core::*;
pub use export::*;
pub use goals::*;
pub use reports::*;
pub use seed::*;
pub use serve::*;
pub use transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
