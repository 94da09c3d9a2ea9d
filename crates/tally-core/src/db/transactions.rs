//! Transaction operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionKind};

/// Filters for transaction listing
///
/// Built with the fluent setters, then passed to `list_transactions` /
/// `count_transactions`.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    /// Calendar month, "YYYY-MM"
    pub month: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(|c| c.to_string());
        self
    }

    pub fn kind(mut self, kind: Option<TransactionKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn month(mut self, month: Option<&str>) -> Self {
        self.month = month.map(|m| m.to_string());
        self
    }

    /// Build the WHERE clause and its parameters
    fn where_clause(&self) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref category) = self.category {
            conditions.push("category = ?".to_string());
            params.push(Box::new(category.clone()));
        }

        if let Some(kind) = self.kind {
            conditions.push("kind = ?".to_string());
            params.push(Box::new(kind.as_str()));
        }

        if let Some(ref month) = self.month {
            conditions.push("strftime('%Y-%m', date) = ?".to_string());
            params.push(Box::new(month.clone()));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (clause, params)
    }
}

impl Database {
    /// Record a new transaction
    ///
    /// Validates at the store boundary: the category must exist, the amount
    /// must be a non-negative magnitude, and an explicit kind must agree with
    /// the category's kind. Returns the stored row, immediately visible to
    /// subsequent queries.
    pub fn add_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        let category = tx.category.trim();
        if category.is_empty() {
            return Err(Error::InvalidData("Category is required".to_string()));
        }
        if tx.amount_cents < 0 {
            return Err(Error::InvalidData(format!(
                "Amount must be non-negative, got {} cents",
                tx.amount_cents
            )));
        }

        let conn = self.conn()?;

        let category_kind: Option<String> = conn
            .query_row(
                "SELECT kind FROM categories WHERE name = ?",
                params![category],
                |row| row.get(0),
            )
            .optional()?;
        let category_kind: TransactionKind = category_kind
            .ok_or_else(|| Error::InvalidData(format!("Unknown category: {}", category)))?
            .parse()
            .map_err(Error::InvalidData)?;

        let kind = match tx.kind {
            Some(kind) if kind != category_kind => {
                return Err(Error::InvalidData(format!(
                    "Category '{}' is an {} category, not {}",
                    category, category_kind, kind
                )));
            }
            Some(kind) => kind,
            None => category_kind,
        };

        conn.execute(
            r#"
            INSERT INTO transactions (date, amount_cents, category, description, kind)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.to_string(),
                tx.amount_cents,
                category,
                tx.description.trim(),
                kind.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {} not found after insert", id)))
    }

    /// List transactions matching a filter, newest first
    pub fn list_transactions(
        &self,
        filter: &TransactionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let (where_clause, mut params) = filter.where_clause();

        let sql = format!(
            r#"
            SELECT id, date, amount_cents, category, description, kind, created_at
            FROM transactions
            {}
            ORDER BY date DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
            where_clause
        );

        params.push(Box::new(limit));
        params.push(Box::new(offset));

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let transactions = stmt
            .query_map(params_refs.as_slice(), |row| Self::row_to_transaction(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Count transactions matching a filter
    pub fn count_transactions(&self, filter: &TransactionFilter) -> Result<i64> {
        let conn = self.conn()?;
        let (where_clause, params) = filter.where_clause();

        let sql = format!("SELECT COUNT(*) FROM transactions {}", where_clause);

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let count: i64 = stmt.query_row(params_refs.as_slice(), |row| row.get(0))?;
        Ok(count)
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, amount_cents, category, description, kind, created_at
             FROM transactions WHERE id = ?",
        )?;

        let transaction = stmt
            .query_row(params![id], |row| Self::row_to_transaction(row))
            .optional()?;

        Ok(transaction)
    }

    /// Helper to convert a row to Transaction
    /// Column order: id, date, amount_cents, category, description, kind, created_at
    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(1)?;
        let kind_str: String = row.get(5)?;
        let created_at_str: String = row.get(6)?;
        Ok(Transaction {
            id: row.get(0)?,
            date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            amount_cents: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            kind: kind_str.parse().unwrap_or_default(),
            created_at: parse_datetime(&created_at_str),
        })
    }
}
