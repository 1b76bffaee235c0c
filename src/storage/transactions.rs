//! Ledger repository backed by transactions.csv
//!
//! Keeps the in-memory transaction list and the file in lockstep: a row is
//! written and flushed before the record joins the list.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult, ValidationError};
use crate::models::fields::{
    parse_amount, parse_date, parse_expense_category, parse_kind, DATE_FORMAT,
};
use crate::models::{Transaction, TransactionKind};

use super::csv_file::{append_row, ensure_with_header, read_rows};

/// Column names of the transactions file
pub const TRANSACTION_HEADER: &[&str] =
    &["Transaction Type", "Amount", "Category", "Description", "Date"];

/// One line of transactions.csv, as text
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRow {
    #[serde(rename = "Transaction Type")]
    kind: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Date")]
    date: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            kind: txn.kind.to_string(),
            amount: txn.amount.to_decimal_string(),
            category: txn.category.clone(),
            description: txn.description.clone(),
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = ValidationError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let kind = parse_kind(&row.kind)?;
        let amount = parse_amount("Amount", &row.amount)?;
        let date = parse_date("Date", &row.date)?;

        let category = match kind {
            TransactionKind::Expense => parse_expense_category(&row.category)?.name().to_string(),
            TransactionKind::Income => row.category.trim().to_string(),
        };

        Ok(Transaction {
            kind,
            amount,
            category,
            description: row.description,
            date,
        })
    }
}

/// Repository for the append-only ledger
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create the file with its header row if it is missing
    pub fn ensure_file(&self) -> KakeiboResult<bool> {
        ensure_with_header(&self.path, TRANSACTION_HEADER)
    }

    /// Replace the in-memory ledger with the file contents
    ///
    /// Fails on the first malformed row, naming its line; the previously
    /// loaded ledger is kept in that case.
    pub fn load(&self) -> KakeiboResult<()> {
        let rows: Vec<(u64, TransactionRow)> = read_rows(&self.path, TRANSACTION_HEADER)?;

        let mut loaded = Vec::with_capacity(rows.len());
        for (line, row) in rows {
            let txn = Transaction::try_from(row)
                .map_err(|e| KakeiboError::malformed_row(&self.path, line, e))?;
            loaded.push(txn);
        }

        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded;

        Ok(())
    }

    /// Append a transaction to the file, then to memory
    pub fn append(&self, txn: Transaction) -> KakeiboResult<()> {
        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        append_row(&self.path, TRANSACTION_HEADER, &TransactionRow::from(&txn))?;
        data.push(txn);

        Ok(())
    }

    /// All transactions in the order they were recorded
    pub fn get_all(&self) -> KakeiboResult<Vec<Transaction>> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Transactions dated within `start..=end`, in recorded order
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> KakeiboResult<Vec<Transaction>> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    pub fn count(&self) -> KakeiboResult<usize> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
