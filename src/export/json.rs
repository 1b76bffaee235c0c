//! JSON Export functionality
//!
//! Exports the ledger, goals and current summary to JSON with schema
//! versioning.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Goal, Transaction};
use crate::reports::{CategoryBreakdown, Summary};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,

    /// Totals at export time
    pub summary: Summary,
    pub breakdown: CategoryBreakdown,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub goal_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> KakeiboResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let goals = storage.goals.get_all()?;

        let summary = Summary::compute(&transactions, &goals)?;
        let breakdown = CategoryBreakdown::compute(&transactions)?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            goals,
            summary,
            breakdown,
            metadata,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> KakeiboResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use crate::models::Money;
    use crate::services::{GoalForm, GoalService, TransactionForm, TransactionService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        let txns = TransactionService::new(storage);
        txns.add(&TransactionForm::new("Income", "1000", "Salary", "Pay", "2024-01-01"))
            .unwrap();
        txns.add(&TransactionForm::new("Expense", "200", "Needs", "Rent", "2024-01-05"))
            .unwrap();
        GoalService::new(storage)
            .add(&GoalForm::new("Bike", "800", "2024-09-01", "150"))
            .unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.goal_count, 1);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2024-01-01"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2024-01-05"));
        assert_eq!(export.summary.balance, Money::from_cents(80_000));
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.transactions, storage.transactions.get_all().unwrap());
        assert_eq!(parsed.goals, storage.goals.get_all().unwrap());
        assert_eq!(parsed.summary.income, Money::from_cents(100_000));
    }
}
