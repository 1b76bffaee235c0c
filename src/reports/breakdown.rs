//! Expense breakdown by category
//!
//! Groups expenses into the fixed categories and works out each one's share
//! of total spending, optionally for a single month.

use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{ExpenseCategory, Money, Month, Transaction};
use crate::storage::Storage;

/// One category's share of spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: ExpenseCategory,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

/// Expense totals for every fixed category, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// `None` when the breakdown spans the whole ledger
    pub month: Option<Month>,
    pub buckets: Vec<CategoryBucket>,
    pub total_expenses: Money,
}

impl CategoryBreakdown {
    /// Group every expense in `transactions`
    ///
    /// Income is ignored. An expense whose category is not one of the fixed
    /// set fails with [`KakeiboError::UnknownCategory`], and a total that
    /// does not fit fails with [`KakeiboError::Overflow`].
    pub fn compute(transactions: &[Transaction]) -> KakeiboResult<Self> {
        let mut buckets: Vec<CategoryBucket> = ExpenseCategory::all()
            .iter()
            .map(|&category| CategoryBucket {
                category,
                total: Money::zero(),
                transaction_count: 0,
                percentage: 0.0,
            })
            .collect();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let category = txn
                .expense_category()
                .ok_or_else(|| KakeiboError::UnknownCategory(txn.category.clone()))?;

            if let Some(bucket) = buckets.iter_mut().find(|b| b.category == category) {
                bucket.total = bucket
                    .total
                    .checked_add(txn.amount)
                    .ok_or_else(|| KakeiboError::Overflow(category.name().to_string()))?;
                bucket.transaction_count += 1;
            }
        }

        let total_expenses = Money::checked_sum(buckets.iter().map(|b| b.total))
            .ok_or_else(|| KakeiboError::Overflow("Total Expenses".to_string()))?;

        if !total_expenses.is_zero() {
            for bucket in &mut buckets {
                bucket.percentage =
                    bucket.total.cents() as f64 / total_expenses.cents() as f64 * 100.0;
            }
        }

        Ok(Self {
            month: None,
            buckets,
            total_expenses,
        })
    }

    /// Breakdown of the loaded ledger, limited to `month` if given
    pub fn generate(storage: &Storage, month: Option<Month>) -> KakeiboResult<Self> {
        let transactions = match month {
            Some(m) => storage
                .transactions
                .get_by_date_range(m.start_date(), m.end_date())?,
            None => storage.transactions.get_all()?,
        };

        let mut breakdown = Self::compute(&transactions)?;
        breakdown.month = month;
        Ok(breakdown)
    }

    pub fn bucket(&self, category: ExpenseCategory) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    /// Largest bucket total, used to scale bar charts
    pub fn max_total(&self) -> Money {
        self.buckets
            .iter()
            .map(|b| b.total)
            .max()
            .unwrap_or_default()
    }
}
