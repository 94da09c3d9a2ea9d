//! Export command implementation

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::Database;
use tally_core::export::export_transactions;

pub fn cmd_export(db: &Database, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = export_transactions(db, file)?;
            println!("✅ Exported {} transactions to {}", count, path.display());
        }
        None => {
            export_transactions(db, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
