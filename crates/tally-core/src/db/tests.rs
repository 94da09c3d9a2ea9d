//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::evaluate_budget_alerts;
    use chrono::NaiveDate;

    fn test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.seed_default_categories().unwrap();
        db
    }

    fn tx(date: &str, amount_cents: i64, category: &str, description: &str) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount_cents,
            category: category.to_string(),
            description: description.to_string(),
            kind: None,
        }
    }

    fn this_month(day: u32) -> String {
        format!("{}-{:02}", super::super::summary::current_month(), day)
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        let filter = TransactionFilter::new();
        assert!(db.list_transactions(&filter, 10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_seed_categories_idempotent() {
        let db = test_db();
        db.seed_default_categories().unwrap();

        let categories = db.list_categories(None).unwrap();
        assert_eq!(categories.len(), 10);

        let expense_names = db
            .category_names(Some(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expense_names.len(), 7);
        assert!(expense_names.contains(&"Food & Dining".to_string()));

        let income_names = db.category_names(Some(TransactionKind::Income)).unwrap();
        assert_eq!(income_names, vec!["Freelance", "Investments", "Salary"]);
    }

    #[test]
    fn test_add_transaction_visible_immediately() {
        let db = test_db();

        let created = db
            .add_transaction(&tx("2026-08-01", 8550, "Food & Dining", "Weekly groceries"))
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.amount_cents, 8550);
        assert_eq!(created.kind, TransactionKind::Expense);

        let listed = db
            .list_transactions(&TransactionFilter::new(), 10, 0)
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].description, "Weekly groceries");
    }

    #[test]
    fn test_add_transaction_kind_from_category() {
        let db = test_db();

        let income = db
            .add_transaction(&tx("2026-08-01", 450000, "Salary", "Monthly salary"))
            .unwrap();
        assert_eq!(income.kind, TransactionKind::Income);

        // Explicit matching kind is fine
        let explicit = db
            .add_transaction(&NewTransaction {
                kind: Some(TransactionKind::Expense),
                ..tx("2026-08-02", 475, "Food & Dining", "Coffee")
            })
            .unwrap();
        assert_eq!(explicit.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_add_transaction_rejects_invalid_input() {
        let db = test_db();

        // Unknown category
        let err = db
            .add_transaction(&tx("2026-08-01", 1000, "Lottery", ""))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("Unknown category"));

        // Missing category
        let err = db.add_transaction(&tx("2026-08-01", 1000, "  ", "")).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        // Kind disagrees with category kind
        let err = db
            .add_transaction(&NewTransaction {
                kind: Some(TransactionKind::Income),
                ..tx("2026-08-01", 1000, "Food & Dining", "")
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        // Negative magnitude
        let err = db
            .add_transaction(&tx("2026-08-01", -500, "Food & Dining", ""))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        // Nothing was stored
        assert_eq!(db.count_transactions(&TransactionFilter::new()).unwrap(), 0);
    }

    #[test]
    fn test_list_transactions_newest_first_with_filters() {
        let db = test_db();
        db.add_transaction(&tx("2026-08-01", 6550, "Food & Dining", "Groceries"))
            .unwrap();
        db.add_transaction(&tx("2026-08-03", 4500, "Transportation", "Gas"))
            .unwrap();
        db.add_transaction(&tx("2026-07-15", 2550, "Food & Dining", "Dinner"))
            .unwrap();

        let all = db
            .list_transactions(&TransactionFilter::new(), 10, 0)
            .unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date.to_string(), "2026-08-03");
        assert_eq!(all[2].date.to_string(), "2026-07-15");

        let food = TransactionFilter::new().category(Some("Food & Dining"));
        assert_eq!(db.count_transactions(&food).unwrap(), 2);

        let july = TransactionFilter::new().month(Some("2026-07"));
        let july_txs = db.list_transactions(&july, 10, 0).unwrap();
        assert_eq!(july_txs.len(), 1);
        assert_eq!(july_txs[0].description, "Dinner");

        let july_food = TransactionFilter::new()
            .category(Some("Food & Dining"))
            .month(Some("2026-08"));
        assert_eq!(db.count_transactions(&july_food).unwrap(), 1);
    }

    #[test]
    fn test_summary_invariant_exact() {
        let db = test_db();
        db.add_transaction(&tx("2026-06-01", 450000, "Salary", "Monthly salary"))
            .unwrap();
        db.add_transaction(&tx("2026-06-02", 80000, "Freelance", "Side project"))
            .unwrap();
        // Amounts chosen to expose float drift if sums were f64 dollars
        db.add_transaction(&tx("2026-06-03", 10, "Food & Dining", "Gum"))
            .unwrap();
        db.add_transaction(&tx("2026-06-04", 20, "Food & Dining", "More gum"))
            .unwrap();
        db.add_transaction(&tx("2026-06-05", 7830, "Transportation", "Gas"))
            .unwrap();

        let summary = db.get_financial_summary(Some("2026-06")).unwrap();
        assert_eq!(summary.total_income_cents, 530000);
        assert_eq!(summary.total_expenses_cents, 7860);
        assert_eq!(
            summary.net_income_cents,
            summary.total_income_cents - summary.total_expenses_cents
        );
        assert_eq!(summary.expenses_by_category["Food & Dining"], 30);
        assert_eq!(summary.expenses_by_category["Transportation"], 7830);
        assert!((summary.savings_rate - (522140.0 / 530000.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_is_all_zero() {
        let db = test_db();
        let summary = db.get_financial_summary(Some("2026-06")).unwrap();
        assert_eq!(summary.total_income_cents, 0);
        assert_eq!(summary.total_expenses_cents, 0);
        assert_eq!(summary.net_income_cents, 0);
        assert_eq!(summary.savings_rate, 0.0);
        assert!(summary.expenses_by_category.is_empty());

        // No alerts regardless of configured budgets
        let budgets = db.expense_budgets().unwrap();
        assert!(!budgets.is_empty());
        let alerts = evaluate_budget_alerts(&summary.expenses_by_category, &budgets);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_summary_recompute_identical() {
        let db = test_db();
        db.add_transaction(&tx("2026-06-01", 450000, "Salary", ""))
            .unwrap();
        db.add_transaction(&tx("2026-06-02", 46435, "Food & Dining", ""))
            .unwrap();

        let first = db.get_financial_summary(Some("2026-06")).unwrap();
        let second = db.get_financial_summary(Some("2026-06")).unwrap();
        assert_eq!(first.total_income_cents, second.total_income_cents);
        assert_eq!(first.total_expenses_cents, second.total_expenses_cents);
        assert_eq!(first.net_income_cents, second.net_income_cents);
        assert_eq!(first.expenses_by_category, second.expenses_by_category);
    }

    #[test]
    fn test_summary_rejects_bad_month() {
        let db = test_db();
        assert!(matches!(
            db.get_financial_summary(Some("June")).unwrap_err(),
            Error::InvalidData(_)
        ));
    }

    #[test]
    fn test_budget_status() {
        let db = test_db();
        db.set_budget("Food & Dining", 40000).unwrap();
        db.add_transaction(&tx("2026-06-05", 46435, "Food & Dining", ""))
            .unwrap();

        let statuses = db.get_budget_status(Some("2026-06")).unwrap();
        let food = statuses
            .iter()
            .find(|s| s.category == "Food & Dining")
            .unwrap();
        assert_eq!(food.budgeted_cents, 40000);
        assert_eq!(food.spent_cents, 46435);
        assert_eq!(food.remaining_cents, -6435);
        assert!((food.percentage - 116.0875).abs() < 1e-9);

        // Categories without spend still appear with zero spent
        let education = statuses.iter().find(|s| s.category == "Education").unwrap();
        assert_eq!(education.spent_cents, 0);
        assert_eq!(education.remaining_cents, education.budgeted_cents);
    }

    #[test]
    fn test_set_budget_rules() {
        let db = test_db();

        let updated = db.set_budget("Shopping", 15000).unwrap();
        assert_eq!(updated.budget_cents, 15000);

        // Zero marks the category unbudgeted and removes it from alerting
        db.set_budget("Shopping", 0).unwrap();
        assert!(!db.expense_budgets().unwrap().contains_key("Shopping"));

        assert!(matches!(
            db.set_budget("Salary", 10000).unwrap_err(),
            Error::InvalidData(_)
        ));
        assert!(matches!(
            db.set_budget("Nonexistent", 10000).unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            db.set_budget("Shopping", -100).unwrap_err(),
            Error::InvalidData(_)
        ));
    }

    #[test]
    fn test_alerts_from_stored_state() {
        let db = test_db();
        db.set_budget("Food & Dining", 40000).unwrap();
        db.set_budget("Transportation", 25000).unwrap();
        db.set_budget("Healthcare", 8000).unwrap();

        db.add_transaction(&tx("2026-06-03", 46435, "Food & Dining", "Restaurants"))
            .unwrap();
        db.add_transaction(&tx("2026-06-10", 19925, "Transportation", "Gas and transit"))
            .unwrap();
        db.add_transaction(&tx("2026-06-12", 6000, "Healthcare", "Pharmacy"))
            .unwrap();
        // Spend in an unbudgeted category must never alert
        db.add_transaction(&tx("2026-06-15", 99900, "Education", "Conference"))
            .unwrap();
        db.set_budget("Education", 0).unwrap();

        let summary = db.get_financial_summary(Some("2026-06")).unwrap();
        let budgets = db.expense_budgets().unwrap();
        let alerts = evaluate_budget_alerts(&summary.expenses_by_category, &budgets);

        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].category, "Food & Dining");
        assert_eq!(alerts[0].tier, AlertTier::Danger);
        assert_eq!(alerts[1].category, "Transportation");
        assert_eq!(alerts[1].tier, AlertTier::Info);
        assert_eq!(alerts[2].category, "Healthcare");
        assert_eq!(alerts[2].tier, AlertTier::Info);
        assert!(alerts.iter().all(|a| a.category != "Education"));
    }

    #[test]
    fn test_spending_report() {
        let db = test_db();
        let today = chrono::Utc::now().date_naive();
        let recent = today - chrono::Duration::days(3);

        db.add_transaction(&tx(&recent.to_string(), 6550, "Food & Dining", "Groceries"))
            .unwrap();
        db.add_transaction(&tx(&recent.to_string(), 3450, "Food & Dining", "Dinner"))
            .unwrap();
        db.add_transaction(&tx(&recent.to_string(), 4500, "Transportation", "Gas"))
            .unwrap();
        // Outside the window
        db.add_transaction(&tx(
            &(today - chrono::Duration::days(90)).to_string(),
            99900,
            "Shopping",
            "Old purchase",
        ))
        .unwrap();

        let report = db.get_spending_report(30).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].category, "Food & Dining");
        assert_eq!(report[0].transactions, 2);
        assert_eq!(report[0].total_cents, 10000);
        assert!((report[0].average - 50.0).abs() < 1e-9);
        assert_eq!(report[1].category, "Transportation");

        assert!(db.get_spending_report(0).is_err());
    }

    #[test]
    fn test_monthly_chart_data() {
        let db = test_db();
        let this_month_day = this_month(2);
        db.add_transaction(&tx(&this_month_day, 450000, "Salary", ""))
            .unwrap();
        db.add_transaction(&tx(&this_month_day, 12000, "Shopping", ""))
            .unwrap();

        let chart = db.get_monthly_chart_data(6).unwrap();
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.income.len(), 6);
        // Oldest first: the current month is the last entry
        assert_eq!(chart.income[5], 4500.0);
        assert_eq!(chart.expenses[5], 120.0);
        assert_eq!(chart.net[5], 4380.0);
        assert_eq!(chart.income[0], 0.0);

        assert!(db.get_monthly_chart_data(0).is_err());
    }

    #[test]
    fn test_goals() {
        let db = test_db();
        let id = db
            .add_goal(
                "Emergency Fund",
                1_000_000,
                NaiveDate::from_ymd_opt(2026, 12, 31),
            )
            .unwrap();
        db.add_goal("Vacation Fund", 300_000, None).unwrap();

        let goals = db.list_goals().unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].name, "Vacation Fund");
        assert_eq!(goals[1].progress_percent, 0.0);

        let updated = db.update_goal_progress(id, 250_000).unwrap();
        assert_eq!(updated.current_cents, 250_000);
        assert_eq!(updated.status, GoalStatus::Active);
        assert_eq!(updated.progress_percent, 25.0);

        // Reaching the target marks the goal completed
        let done = db.update_goal_progress(id, 1_000_000).unwrap();
        assert_eq!(done.status, GoalStatus::Completed);

        assert!(matches!(
            db.add_goal("", 1000, None).unwrap_err(),
            Error::InvalidData(_)
        ));
        assert!(matches!(
            db.update_goal_progress(9999, 100).unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
