//! Financial summary and report aggregation
//!
//! Every function here is a pure read over current database state: summaries
//! are recomputed per request and never cached or persisted.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use rusqlite::params;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{BudgetStatus, FinancialSummary, MonthlyChartData, SpendingReportRow};
use crate::money::dollars;

/// The current calendar month as "YYYY-MM"
pub fn current_month() -> String {
    Utc::now().date_naive().format("%Y-%m").to_string()
}

/// Validate a "YYYY-MM" month string, returning it in canonical zero-padded form
fn validate_month(month: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m").to_string())
        .map_err(|_| Error::InvalidData(format!("Invalid month format (use YYYY-MM): {}", month)))
}

/// The first day of the month `n` months before `date`
fn months_back(date: NaiveDate, n: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - n as i32;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(date)
}

impl Database {
    /// Compute the financial summary for a calendar month
    ///
    /// Defaults to the current month. Empty transaction sets produce an
    /// all-zero summary, not an error. Sums are exact (integer cents).
    pub fn get_financial_summary(&self, month: Option<&str>) -> Result<FinancialSummary> {
        let period = match month {
            Some(m) => validate_month(m)?,
            None => current_month(),
        };

        let conn = self.conn()?;

        let total_income: i64 = conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM transactions
             WHERE kind = 'income' AND strftime('%Y-%m', date) = ?",
            params![period],
            |row| row.get(0),
        )?;

        let total_expenses: i64 = conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM transactions
             WHERE kind = 'expense' AND strftime('%Y-%m', date) = ?",
            params![period],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(
            "SELECT category, SUM(amount_cents) FROM transactions
             WHERE kind = 'expense' AND strftime('%Y-%m', date) = ?
             GROUP BY category",
        )?;
        let expenses_by_category = stmt
            .query_map(params![period], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()?;

        let net_income = total_income - total_expenses;
        let savings_rate = if total_income > 0 {
            net_income as f64 / total_income as f64 * 100.0
        } else {
            0.0
        };

        Ok(FinancialSummary {
            period,
            total_income_cents: total_income,
            total_expenses_cents: total_expenses,
            net_income_cents: net_income,
            savings_rate,
            expenses_by_category,
        })
    }

    /// Budget position of every expense category for a month
    ///
    /// Includes unbudgeted categories (budgeted = 0, percentage = 0) so the
    /// caller sees the full picture.
    pub fn get_budget_status(&self, month: Option<&str>) -> Result<Vec<BudgetStatus>> {
        let summary = self.get_financial_summary(month)?;
        let categories = self.list_categories(Some(crate::models::TransactionKind::Expense))?;

        let statuses = categories
            .into_iter()
            .map(|category| {
                let spent = summary
                    .expenses_by_category
                    .get(&category.name)
                    .copied()
                    .unwrap_or(0);
                let percentage = if category.budget_cents > 0 {
                    spent as f64 / category.budget_cents as f64 * 100.0
                } else {
                    0.0
                };
                BudgetStatus {
                    category: category.name,
                    budgeted_cents: category.budget_cents,
                    spent_cents: spent,
                    remaining_cents: category.budget_cents - spent,
                    percentage,
                }
            })
            .collect();

        Ok(statuses)
    }

    /// Per-category expense report for the trailing `days` window
    ///
    /// Rows are ordered by total descending.
    pub fn get_spending_report(&self, days: i64) -> Result<Vec<SpendingReportRow>> {
        if days <= 0 {
            return Err(Error::InvalidData(format!(
                "Report window must be positive, got {} days",
                days
            )));
        }

        let from = Utc::now().date_naive() - chrono::Duration::days(days);
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*), SUM(amount_cents)
             FROM transactions
             WHERE kind = 'expense' AND date >= ?
             GROUP BY category
             ORDER BY SUM(amount_cents) DESC",
        )?;

        let rows = stmt
            .query_map(params![from.to_string()], |row| {
                let count: i64 = row.get(1)?;
                let total: i64 = row.get(2)?;
                Ok(SpendingReportRow {
                    category: row.get(0)?,
                    transactions: count,
                    total_cents: total,
                    average: if count > 0 {
                        dollars(total) / count as f64
                    } else {
                        0.0
                    },
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Income/expense/net series for the last `months` calendar months,
    /// oldest first (dashboard chart data)
    pub fn get_monthly_chart_data(&self, months: u32) -> Result<MonthlyChartData> {
        if months == 0 || months > 60 {
            return Err(Error::InvalidData(format!(
                "Chart window must be 1-60 months, got {}",
                months
            )));
        }

        let today = Utc::now().date_naive();
        let mut chart = MonthlyChartData {
            labels: Vec::with_capacity(months as usize),
            income: Vec::with_capacity(months as usize),
            expenses: Vec::with_capacity(months as usize),
            net: Vec::with_capacity(months as usize),
        };

        for i in (0..months).rev() {
            let first_of_month = months_back(today, i);
            let period = first_of_month.format("%Y-%m").to_string();
            let summary = self.get_financial_summary(Some(&period))?;

            chart.labels.push(first_of_month.format("%b %Y").to_string());
            chart.income.push(dollars(summary.total_income_cents));
            chart.expenses.push(dollars(summary.total_expenses_cents));
            chart.net.push(dollars(summary.net_income_cents));
        }

        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_back() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(months_back(d, 0), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(months_back(d, 1), NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(months_back(d, 8), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(months_back(d, 24), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
    }

    #[test]
    fn test_validate_month() {
        assert_eq!(validate_month("2026-08").unwrap(), "2026-08");
        // Non-padded input normalizes to the canonical form
        assert_eq!(validate_month("2026-8").unwrap(), "2026-08");
        assert!(validate_month("2026-13").is_err());
        assert!(validate_month("August").is_err());
        assert!(validate_month("2026-8-1").is_err());
    }
}
