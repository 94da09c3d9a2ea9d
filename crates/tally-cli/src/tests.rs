//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use tally_core::db::{Database, TransactionFilter};
use tally_core::models::TransactionKind;

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    let db = Database::in_memory().unwrap();
    db.seed_default_categories().unwrap();
    db
}

// ========== Add Command Tests ==========

#[test]
fn test_cmd_add() {
    let db = setup_test_db();
    let result = commands::cmd_add(
        &db,
        85.50,
        "Food & Dining",
        "Weekly groceries",
        None,
        Some("2026-08-01"),
    );
    assert!(result.is_ok());

    let transactions = db
        .list_transactions(&TransactionFilter::new(), 10, 0)
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount_cents, 8550);
    assert_eq!(transactions[0].kind, TransactionKind::Expense);
}

#[test]
fn test_cmd_add_rejects_unknown_category() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 10.0, "Lottery", "", None, None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Unknown category"));
}

#[test]
fn test_cmd_add_rejects_bad_date() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 10.0, "Food & Dining", "", None, Some("Aug 1"));
    assert!(result.is_err());
}

#[test]
fn test_cmd_add_rejects_mismatched_kind() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 10.0, "Salary", "", Some("expense"), None);
    assert!(result.is_err());
}

// ========== Listing Command Tests ==========

#[test]
fn test_cmd_transactions_list() {
    let db = setup_test_db();
    commands::cmd_add(&db, 85.50, "Food & Dining", "Groceries", None, Some("2026-08-01")).unwrap();
    commands::cmd_add(&db, 4500.0, "Salary", "Monthly salary", None, Some("2026-08-01")).unwrap();

    assert!(commands::cmd_transactions_list(&db, 20, None, None).is_ok());
    assert!(commands::cmd_transactions_list(&db, 20, Some("Food & Dining"), None).is_ok());
    assert!(commands::cmd_transactions_list(&db, 20, None, Some("2026-08")).is_ok());
}

#[test]
fn test_cmd_summary_and_alerts() {
    let db = setup_test_db();
    commands::cmd_add(&db, 4500.0, "Salary", "", None, Some("2026-06-01")).unwrap();
    commands::cmd_add(&db, 464.35, "Food & Dining", "", None, Some("2026-06-10")).unwrap();
    commands::cmd_budgets_set(&db, "Food & Dining", 400.0).unwrap();

    assert!(commands::cmd_summary(&db, Some("2026-06")).is_ok());
    assert!(commands::cmd_alerts(&db, Some("2026-06")).is_ok());
    // Empty month still renders
    assert!(commands::cmd_summary(&db, Some("2025-01")).is_ok());
    // Invalid month errors out
    assert!(commands::cmd_summary(&db, Some("June")).is_err());
}

#[test]
fn test_cmd_report() {
    let db = setup_test_db();
    commands::cmd_add(&db, 85.50, "Food & Dining", "Groceries", None, None).unwrap();

    assert!(commands::cmd_report(&db, 30).is_ok());
    assert!(commands::cmd_report(&db, 0).is_err());
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budgets_set() {
    let db = setup_test_db();
    assert!(commands::cmd_budgets_set(&db, "Food & Dining", 400.0).is_ok());

    let category = db.get_category("Food & Dining").unwrap().unwrap();
    assert_eq!(category.budget_cents, 40000);

    assert!(commands::cmd_budgets_set(&db, "Salary", 100.0).is_err());
    assert!(commands::cmd_budgets_set(&db, "Nonexistent", 100.0).is_err());
    assert!(commands::cmd_budgets_list(&db, None).is_ok());
}

// ========== Goal Command Tests ==========

#[test]
fn test_cmd_goals() {
    let db = setup_test_db();
    assert!(commands::cmd_goals_add(&db, "Emergency Fund", 10000.0, Some("2026-12-31")).is_ok());

    let goals = db.list_goals().unwrap();
    assert_eq!(goals.len(), 1);
    let id = goals[0].id;

    assert!(commands::cmd_goals_progress(&db, id, 2500.0).is_ok());
    assert_eq!(db.get_goal(id).unwrap().unwrap().current_cents, 250_000);

    assert!(commands::cmd_goals_progress(&db, 9999, 10.0).is_err());
    assert!(commands::cmd_goals_list(&db).is_ok());
}

// ========== Seed Command Tests ==========

#[test]
fn test_cmd_seed_triggers_alerts() {
    use tally_core::alerts::evaluate_budget_alerts;
    use tally_core::models::AlertTier;

    let db = setup_test_db();
    commands::cmd_seed(&db).unwrap();

    let summary = db.get_financial_summary(None).unwrap();
    assert!(summary.total_income_cents > 0);
    assert_eq!(
        summary.net_income_cents,
        summary.total_income_cents - summary.total_expenses_cents
    );

    let budgets = db.expense_budgets().unwrap();
    let alerts = evaluate_budget_alerts(&summary.expenses_by_category, &budgets);

    // The demo month exercises every tier
    assert!(alerts.iter().any(|a| a.tier == AlertTier::Danger));
    assert!(alerts.iter().any(|a| a.tier == AlertTier::Warning));
    assert!(alerts.iter().any(|a| a.tier == AlertTier::Info));

    // Most severe first
    for pair in alerts.windows(2) {
        assert!(pair[0].percentage >= pair[1].percentage);
    }
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_to_file() {
    let db = setup_test_db();
    commands::cmd_add(&db, 85.50, "Food & Dining", "Groceries", None, Some("2026-08-01")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    assert!(commands::cmd_export(&db, Some(path.as_path())).is_ok());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Date,Amount,Category,Description,Type"));
    assert!(contents.contains("85.50"));
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer string", 10), "a longe...");
}
