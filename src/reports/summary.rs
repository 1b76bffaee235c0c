//! Financial summary
//!
//! The four dashboard totals, recomputed from scratch on every call.

use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Goal, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Totals shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expenses: Money,
    /// Sum of every goal's saved amount
    pub savings: Money,
    /// Income minus expenses; goal savings are not subtracted
    pub balance: Money,
}

fn total(label: &str, amounts: impl IntoIterator<Item = Money>) -> KakeiboResult<Money> {
    Money::checked_sum(amounts).ok_or_else(|| KakeiboError::Overflow(label.to_string()))
}

impl Summary {
    /// Fails with [`KakeiboError::Overflow`] if a total does not fit
    pub fn compute(transactions: &[Transaction], goals: &[Goal]) -> KakeiboResult<Self> {
        let total_of = |kind: TransactionKind, label: &str| -> KakeiboResult<Money> {
            total(
                label,
                transactions
                    .iter()
                    .filter(|t| t.kind == kind)
                    .map(|t| t.amount),
            )
        };

        let income = total_of(TransactionKind::Income, "Total Income")?;
        let expenses = total_of(TransactionKind::Expense, "Total Expenses")?;
        let savings = total("Savings for Goals", goals.iter().map(|g| g.amount_saved))?;
        let balance = income
            .checked_sub(expenses)
            .ok_or_else(|| KakeiboError::Overflow("Remaining Balance".to_string()))?;

        Ok(Self {
            income,
            expenses,
            savings,
            balance,
        })
    }

    /// Summary of everything currently loaded in storage
    pub fn generate(storage: &Storage) -> KakeiboResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let goals = storage.goals.get_all()?;
        Self::compute(&transactions, &goals)
    }
}
