//! Form input for new transactions and goals
//!
//! Forms hold exactly what the user typed. `validate` turns them into typed
//! records or reports the first problem found; nothing is written until a
//! form validates.

use crate::error::ValidationError;
use crate::models::fields::{parse_amount, parse_date, parse_expense_category, parse_kind, require};
use crate::models::{Goal, Transaction, TransactionKind};

/// Raw input for a new transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionForm {
    pub fn new(
        kind: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Check every field and build the transaction
    ///
    /// Blank fields are reported first, in form order, then parse errors.
    pub fn validate(&self) -> Result<Transaction, ValidationError> {
        let kind = require("Transaction Type", &self.kind)?;
        let amount = require("Amount", &self.amount)?;
        let category = require("Category", &self.category)?;
        let description = require("Description", &self.description)?;
        let date = require("Date", &self.date)?;

        let kind = parse_kind(kind)?;
        let amount = parse_amount("Amount", amount)?;
        let date = parse_date("Date", date)?;

        let category = match kind {
            TransactionKind::Expense => parse_expense_category(category)?.name().to_string(),
            TransactionKind::Income => category.to_string(),
        };

        Ok(Transaction {
            kind,
            amount,
            category,
            description: description.to_string(),
            date,
        })
    }
}

/// Raw input for a new savings goal
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub target_date: String,
    pub amount_saved: String,
}

impl GoalForm {
    pub fn new(
        name: impl Into<String>,
        target_amount: impl Into<String>,
        target_date: impl Into<String>,
        amount_saved: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount: target_amount.into(),
            target_date: target_date.into(),
            amount_saved: amount_saved.into(),
        }
    }

    pub fn validate(&self) -> Result<Goal, ValidationError> {
        let name = require("Goal Name", &self.name)?;
        let target_amount = require("Target Amount", &self.target_amount)?;
        let target_date = require("Target Date", &self.target_date)?;
        let amount_saved = require("Amount Saved", &self.amount_saved)?;

        Ok(Goal {
            name: name.to_string(),
            target_amount: parse_amount("Target Amount", target_amount)?,
            target_date: parse_date("Target Date", target_date)?,
            amount_saved: parse_amount("Amount Saved", amount_saved)?,
        })
    }
}
