//! Category and budget operations

use std::collections::BTreeMap;

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Category, TransactionKind};

/// Default category set seeded at init
///
/// (name, kind, monthly budget in cents, chart color). Income categories are
/// never budgeted.
const DEFAULT_CATEGORIES: &[(&str, TransactionKind, i64, &str)] = &[
    ("Food & Dining", TransactionKind::Expense, 50000, "#e74c3c"),
    ("Transportation", TransactionKind::Expense, 30000, "#f39c12"),
    ("Shopping", TransactionKind::Expense, 20000, "#9b59b6"),
    ("Entertainment", TransactionKind::Expense, 15000, "#e67e22"),
    ("Bills & Utilities", TransactionKind::Expense, 40000, "#34495e"),
    ("Healthcare", TransactionKind::Expense, 10000, "#16a085"),
    ("Education", TransactionKind::Expense, 5000, "#2980b9"),
    ("Salary", TransactionKind::Income, 0, "#27ae60"),
    ("Freelance", TransactionKind::Income, 0, "#f1c40f"),
    ("Investments", TransactionKind::Income, 0, "#8e44ad"),
];

impl Database {
    /// Seed the default category set (idempotent)
    pub fn seed_default_categories(&self) -> Result<()> {
        let conn = self.conn()?;
        for (name, kind, budget_cents, color) in DEFAULT_CATEGORIES {
            conn.execute(
                r#"
                INSERT OR IGNORE INTO categories (name, kind, budget_cents, color)
                VALUES (?, ?, ?, ?)
                "#,
                params![name, kind.as_str(), budget_cents, color],
            )?;
        }
        Ok(())
    }

    /// List categories, optionally filtered by kind, ordered by name
    pub fn list_categories(&self, kind: Option<TransactionKind>) -> Result<Vec<Category>> {
        let conn = self.conn()?;

        let (sql, params): (&str, Vec<Box<dyn rusqlite::ToSql>>) = match kind {
            Some(kind) => (
                "SELECT id, name, kind, budget_cents, color FROM categories
                 WHERE kind = ? ORDER BY name",
                vec![Box::new(kind.as_str())],
            ),
            None => (
                "SELECT id, name, kind, budget_cents, color FROM categories ORDER BY name",
                vec![],
            ),
        };

        let mut stmt = conn.prepare(sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let categories = stmt
            .query_map(params_refs.as_slice(), |row| Self::row_to_category(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// List known category names, ordered
    pub fn category_names(&self, kind: Option<TransactionKind>) -> Result<Vec<String>> {
        Ok(self
            .list_categories(kind)?
            .into_iter()
            .map(|c| c.name)
            .collect())
    }

    /// Get a category by name
    pub fn get_category(&self, name: &str) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, name, kind, budget_cents, color FROM categories WHERE name = ?",
                params![name],
                |row| Self::row_to_category(row),
            )
            .optional()?;
        Ok(category)
    }

    /// Create a new category
    pub fn add_category(
        &self,
        name: &str,
        kind: TransactionKind,
        budget_cents: i64,
        color: Option<&str>,
    ) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData("Category name is required".to_string()));
        }
        if budget_cents < 0 {
            return Err(Error::InvalidData(
                "Budget must be non-negative".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO categories (name, kind, budget_cents, color) VALUES (?, ?, ?, ?)",
            params![name, kind.as_str(), budget_cents, color.unwrap_or("#3498db")],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Set the monthly budget for an expense category
    ///
    /// A budget of zero marks the category unbudgeted (no alerts). Income
    /// categories cannot carry budgets.
    pub fn set_budget(&self, category: &str, budget_cents: i64) -> Result<Category> {
        if budget_cents < 0 {
            return Err(Error::InvalidData(
                "Budget must be non-negative".to_string(),
            ));
        }

        let existing = self
            .get_category(category)?
            .ok_or_else(|| Error::NotFound(format!("Category not found: {}", category)))?;
        if existing.kind != TransactionKind::Expense {
            return Err(Error::InvalidData(format!(
                "Cannot set a budget on income category '{}'",
                category
            )));
        }

        let conn = self.conn()?;
        conn.execute(
            "UPDATE categories SET budget_cents = ? WHERE name = ?",
            params![budget_cents, category],
        )?;

        self.get_category(category)?
            .ok_or_else(|| Error::NotFound(format!("Category not found: {}", category)))
    }

    /// Budgets for all budgeted expense categories, as category -> cents
    ///
    /// Categories with a zero budget are omitted (unbudgeted, no alert
    /// possible).
    pub fn expense_budgets(&self) -> Result<BTreeMap<String, i64>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, budget_cents FROM categories
             WHERE kind = 'expense' AND budget_cents > 0",
        )?;

        let budgets = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()?;

        Ok(budgets)
    }

    /// Helper to convert a row to Category
    /// Column order: id, name, kind, budget_cents, color
    fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
        let kind_str: String = row.get(2)?;
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: kind_str.parse().unwrap_or_default(),
            budget_cents: row.get(3)?,
            color: row.get(4)?,
        })
    }
}
