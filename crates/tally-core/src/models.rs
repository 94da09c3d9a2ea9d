//! Domain models for Tally

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a transaction or category represents money coming in or going out.
///
/// Amounts are always stored as non-negative magnitudes; this field is the
/// canonical sign convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    /// Non-negative magnitude in cents; serialized as dollars
    #[serde(rename = "amount", with = "crate::money::as_dollars")]
    pub amount_cents: i64,
    pub category: String,
    pub description: String,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

/// A new transaction to be recorded (before DB insertion)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub category: String,
    pub description: String,
    /// When None, the kind is taken from the category
    pub kind: Option<TransactionKind>,
}

/// A spending or income category, with an optional monthly budget
///
/// `budget_cents == 0` means unbudgeted; budgets only apply to expense
/// categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: TransactionKind,
    #[serde(rename = "budget_amount", with = "crate::money::as_dollars")]
    pub budget_cents: i64,
    /// Hex color for charts, e.g. "#e74c3c"
    pub color: String,
}

/// Budget position of a single expense category for the current month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    #[serde(rename = "budgeted", with = "crate::money::as_dollars")]
    pub budgeted_cents: i64,
    #[serde(rename = "spent", with = "crate::money::as_dollars")]
    pub spent_cents: i64,
    #[serde(rename = "remaining", with = "crate::money::as_dollars")]
    pub remaining_cents: i64,
    /// spent / budgeted * 100, or 0 when unbudgeted
    pub percentage: f64,
}

/// Severity tier of a budget alert
///
/// Ordering matters: `Danger > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    Info,
    Warning,
    Danger,
}

impl AlertTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for AlertTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A budget alert for one category, recomputed on demand (never persisted)
#[derive(Debug, Clone, Serialize)]
pub struct BudgetAlert {
    #[serde(rename = "type")]
    pub tier: AlertTier,
    pub category: String,
    #[serde(rename = "spent", with = "crate::money::as_dollars")]
    pub spent_cents: i64,
    #[serde(rename = "budget", with = "crate::money::as_dollars")]
    pub budgeted_cents: i64,
    pub percentage: f64,
    pub message: String,
}

/// Monthly financial summary, derived from the transaction store
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    /// Calendar month this summary covers, "YYYY-MM"
    pub period: String,
    #[serde(rename = "total_income", with = "crate::money::as_dollars")]
    pub total_income_cents: i64,
    #[serde(rename = "total_expenses", with = "crate::money::as_dollars")]
    pub total_expenses_cents: i64,
    #[serde(rename = "net_income", with = "crate::money::as_dollars")]
    pub net_income_cents: i64,
    /// net_income / total_income * 100, or 0 when there is no income
    pub savings_rate: f64,
    #[serde(with = "crate::money::map_as_dollars")]
    pub expenses_by_category: BTreeMap<String, i64>,
}

/// One row of the trailing-window spending report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReportRow {
    pub category: String,
    pub transactions: i64,
    #[serde(rename = "total", with = "crate::money::as_dollars")]
    pub total_cents: i64,
    /// Average transaction size in dollars
    pub average: f64,
}

/// Income/expense/net series for the last N months, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyChartData {
    /// Month labels, e.g. "Mar 2026"
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expenses: Vec<f64>,
    pub net: Vec<f64>,
}

/// Status of a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    #[serde(rename = "target_amount", with = "crate::money::as_dollars")]
    pub target_cents: i64,
    #[serde(rename = "current_amount", with = "crate::money::as_dollars")]
    pub current_cents: i64,
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    /// current / target * 100, or 0 when the target is zero
    pub progress_percent: f64,
    pub created_at: DateTime<Utc>,
}
