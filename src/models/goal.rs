//! Savings goal model
//!
//! A named target amount to reach by a date, together with how much has
//! been put aside so far.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: Money,
    pub target_date: NaiveDate,
    pub amount_saved: Money,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        target_date: NaiveDate,
        amount_saved: Money,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            target_date,
            amount_saved,
        }
    }

    /// Amount still missing to reach the target (never negative)
    pub fn remaining(&self) -> Money {
        self.target_amount
            .checked_sub(self.amount_saved)
            .filter(|m| !m.is_negative())
            .unwrap_or_default()
    }

    /// Saved amount as a percentage of the target, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 100.0;
        }
        let pct = self.amount_saved.cents() as f64 / self.target_amount.cents() as f64 * 100.0;
        pct.min(100.0)
    }

    pub fn is_reached(&self) -> bool {
        self.amount_saved >= self.target_amount
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} by {} (Saved: {})",
            self.name,
            self.target_amount,
            self.target_date.format("%Y-%m-%d"),
            self.amount_saved
        )
    }
}
