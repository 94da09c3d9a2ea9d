//! Budget alert evaluation
//!
//! Pure functions over already-aggregated data: no database access, no side
//! effects. Alerts are recomputed on every request and never persisted.

use std::collections::BTreeMap;

use crate::models::{AlertTier, BudgetAlert};
use crate::money::format_dollars;

/// Spend ratio (percent) at or above which an info alert fires
pub const INFO_THRESHOLD: f64 = 60.0;
/// Spend ratio (percent) at or above which a warning alert fires
pub const WARNING_THRESHOLD: f64 = 80.0;
/// Spend ratio (percent) at or above which a danger alert fires
pub const DANGER_THRESHOLD: f64 = 100.0;

/// Classify a spend-vs-budget percentage into an alert tier.
///
/// Boundaries are inclusive: exactly 100.0 is danger, exactly 80.0 is
/// warning, exactly 60.0 is info. Below the info threshold no alert fires.
pub fn classify_percentage(percentage: f64) -> Option<AlertTier> {
    if percentage >= DANGER_THRESHOLD {
        Some(AlertTier::Danger)
    } else if percentage >= WARNING_THRESHOLD {
        Some(AlertTier::Warning)
    } else if percentage >= INFO_THRESHOLD {
        Some(AlertTier::Info)
    } else {
        None
    }
}

/// Evaluate budget alerts for one month of per-category expense totals.
///
/// `budgets` maps category name to its monthly budget in cents. Categories
/// with a zero budget are treated as unbudgeted and skipped, as are budgeted
/// categories with no recorded spend. Output is ordered most-severe-first:
/// descending percentage, ties broken by category name.
pub fn evaluate_budget_alerts(
    expenses_by_category: &BTreeMap<String, i64>,
    budgets: &BTreeMap<String, i64>,
) -> Vec<BudgetAlert> {
    let mut alerts: Vec<BudgetAlert> = budgets
        .iter()
        .filter(|(_, &budgeted)| budgeted > 0)
        .filter_map(|(category, &budgeted)| {
            let spent = expenses_by_category.get(category).copied().unwrap_or(0);
            if spent == 0 {
                return None;
            }
            let percentage = spent as f64 / budgeted as f64 * 100.0;
            let tier = classify_percentage(percentage)?;
            Some(BudgetAlert {
                tier,
                category: category.clone(),
                spent_cents: spent,
                budgeted_cents: budgeted,
                percentage,
                message: alert_message(tier, spent, budgeted, percentage),
            })
        })
        .collect();

    alerts.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.category.cmp(&b.category))
    });

    alerts
}

fn alert_message(tier: AlertTier, spent: i64, budgeted: i64, percentage: f64) -> String {
    let prefix = match tier {
        AlertTier::Danger => "Budget exceeded!",
        AlertTier::Warning => "Budget warning:",
        AlertTier::Info => "Budget check:",
    };
    format!(
        "{} Spent {} of {} ({:.1}%)",
        prefix,
        format_dollars(spent),
        format_dollars(budgeted),
        percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_danger_tier() {
        // budgeted $400, spent $464.35 -> ~116.09%, danger
        let alerts =
            evaluate_budget_alerts(&map(&[("Food & Dining", 46435)]), &map(&[("Food & Dining", 40000)]));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].tier, AlertTier::Danger);
        assert!((alerts[0].percentage - 116.0875).abs() < 1e-9);
        assert_eq!(
            alerts[0].message,
            "Budget exceeded! Spent $464.35 of $400.00 (116.1%)"
        );
    }

    #[test]
    fn test_warning_tier_just_under_danger() {
        // budgeted $250, spent $249.25 -> 99.7%: warning, not danger
        let alerts = evaluate_budget_alerts(
            &map(&[("Transportation", 24925)]),
            &map(&[("Transportation", 25000)]),
        );
        assert_eq!(alerts[0].tier, AlertTier::Warning);
        assert!((alerts[0].percentage - 99.7).abs() < 1e-9);
    }

    #[test]
    fn test_info_tier_and_just_under_warning() {
        // spent $199.25 of $250 -> 79.7%: just under the warning boundary
        let alerts =
            evaluate_budget_alerts(&map(&[("Shopping", 19925)]), &map(&[("Shopping", 25000)]));
        assert_eq!(alerts[0].tier, AlertTier::Info);
        assert!((alerts[0].percentage - 79.7).abs() < 1e-9);

        // spent $60 of $80 -> exactly 75%: info
        let alerts = evaluate_budget_alerts(&map(&[("Healthcare", 6000)]), &map(&[("Healthcare", 8000)]));
        assert_eq!(alerts[0].tier, AlertTier::Info);
        assert_eq!(alerts[0].percentage, 75.0);
    }

    #[test]
    fn test_inclusive_boundaries() {
        assert_eq!(classify_percentage(100.0), Some(AlertTier::Danger));
        assert_eq!(classify_percentage(99.999), Some(AlertTier::Warning));
        assert_eq!(classify_percentage(80.0), Some(AlertTier::Warning));
        assert_eq!(classify_percentage(79.999), Some(AlertTier::Info));
        assert_eq!(classify_percentage(60.0), Some(AlertTier::Info));
        assert_eq!(classify_percentage(59.999), None);
    }

    #[test]
    fn test_below_info_threshold_no_alert() {
        // spent $40 of $80 -> 50%: nothing
        let alerts = evaluate_budget_alerts(&map(&[("Education", 4000)]), &map(&[("Education", 8000)]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_unbudgeted_category_never_alerts() {
        // Spend recorded but no budget configured for the category
        let alerts = evaluate_budget_alerts(
            &map(&[("Gifts", 99900)]),
            &map(&[("Food & Dining", 40000)]),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_zero_budget_treated_as_unbudgeted() {
        let alerts = evaluate_budget_alerts(&map(&[("Shopping", 15000)]), &map(&[("Shopping", 0)]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_budgeted_category_without_spend_skipped() {
        let alerts =
            evaluate_budget_alerts(&BTreeMap::new(), &map(&[("Food & Dining", 40000)]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_sorted_most_severe_first() {
        let expenses = map(&[
            ("Entertainment", 12550), // 125.5% of 100
            ("Food & Dining", 46435), // ~116.1% of 400
            ("Transportation", 19925), // 79.7% of 250
            ("Healthcare", 6000),     // 75% of 80
        ]);
        let budgets = map(&[
            ("Food & Dining", 40000),
            ("Transportation", 25000),
            ("Entertainment", 10000),
            ("Healthcare", 8000),
        ]);
        let alerts = evaluate_budget_alerts(&expenses, &budgets);
        let categories: Vec<&str> = alerts.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Entertainment", "Food & Dining", "Transportation", "Healthcare"]
        );
        assert_eq!(alerts[0].tier, AlertTier::Danger);
        assert_eq!(alerts[3].tier, AlertTier::Info);
    }

    #[test]
    fn test_equal_percentage_ties_break_by_category() {
        let expenses = map(&[("Bravo", 8000), ("Alpha", 4000)]);
        let budgets = map(&[("Bravo", 10000), ("Alpha", 5000)]);
        let alerts = evaluate_budget_alerts(&expenses, &budgets);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].category, "Alpha");
        assert_eq!(alerts[1].category, "Bravo");
    }
}
