//! Transaction service
//!
//! Validates new transactions, appends them to the ledger and lists them
//! back with simple filters.

use crate::audit::EntityType;
use crate::error::KakeiboResult;
use crate::models::{ExpenseCategory, Month, Transaction, TransactionKind};
use crate::storage::Storage;

use super::form::TransactionForm;
use super::Added;

/// Service for ledger management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub month: Option<Month>,
    /// Keep only the most recent N matches
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category name (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn expense_category(self, category: ExpenseCategory) -> Self {
        self.kind(TransactionKind::Expense).category(category.name())
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|k| k != txn.kind) {
            return false;
        }
        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(month) = self.month {
            if !month.contains(txn.date) {
                return false;
            }
        }
        true
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate the form and append the resulting transaction
    ///
    /// A form that fails validation leaves the ledger and its file untouched.
    /// Once the row is saved, an audit log failure is returned in the
    /// [`Added`] rather than as an error, so a retry cannot duplicate it.
    pub fn add(&self, form: &TransactionForm) -> KakeiboResult<Added<Transaction>> {
        let txn = form.validate()?;

        self.storage.transactions.append(txn.clone())?;

        let audit_error = self
            .storage
            .log_added(
                EntityType::Transaction,
                format!("{} {} {}", txn.date, txn.kind, txn.amount),
                &txn,
            )
            .err();

        Ok(Added {
            record: txn,
            audit_error,
        })
    }

    /// List transactions in recorded order
    pub fn list(&self, filter: &TransactionFilter) -> KakeiboResult<Vec<Transaction>> {
        let mut transactions = match filter.month {
            Some(month) => self
                .storage
                .transactions
                .get_by_date_range(month.start_date(), month.end_date())?,
            None => self.storage.transactions.get_all()?,
        };

        transactions.retain(|t| filter.matches(t));

        if let Some(limit) = filter.limit {
            let skip = transactions.len().saturating_sub(limit);
            transactions.drain(..skip);
        }

        Ok(transactions)
    }

    pub fn count(&self) -> KakeiboResult<usize> {
        self.storage.transactions.count()
    }
}
