//! Transaction data export

use std::io::Write;

use crate::db::{Database, TransactionFilter};
use crate::error::Result;
use crate::money::dollars;

/// Write all transactions as CSV, newest first
///
/// Header row: Date,Amount,Category,Description,Type
/// Returns the number of records written.
pub fn export_transactions<W: Write>(db: &Database, writer: W) -> Result<usize> {
    let transactions = db.list_transactions(&TransactionFilter::new(), i64::MAX, 0)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Date", "Amount", "Category", "Description", "Type"])?;

    for tx in &transactions {
        csv_writer.write_record([
            tx.date.to_string(),
            format!("{:.2}", dollars(tx.amount_cents)),
            tx.category.clone(),
            tx.description.clone(),
            tx.kind.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}
