//! Transaction model
//!
//! Income and expense records. Transactions are immutable once they have
//! been appended to the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    /// Case-insensitive; the stored form is always "Income" or "Expense"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(s.to_string()),
        }
    }
}

/// The fixed set of expense categories a breakdown is grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Needs,
    Wants,
    Culture,
    Unplanned,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[Self::Needs, Self::Wants, Self::Culture, Self::Unplanned]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Culture => "Culture",
            Self::Unplanned => "Unplanned",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| s.to_string())
    }
}

/// A single income or expense entry in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,

    /// Always zero or positive; the kind carries the direction
    pub amount: Money,

    /// Free text for income, one of [`ExpenseCategory`] for expenses
    pub category: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,
}

impl Transaction {
    pub fn income(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    pub fn expense(
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount,
            category: category.name().to_string(),
            description: description.into(),
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The breakdown bucket for an expense, if its category is one of the fixed set
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        if self.is_expense() {
            self.category.parse().ok()
        } else {
            None
        }
    }

    /// Amount with sign applied: positive for income, negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("Transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("needs".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Needs));
        assert_eq!(" Culture ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Culture));
        assert!("Salary".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_expense_category_lookup() {
        let txn = Transaction::expense(
            Money::from_cents(2000),
            ExpenseCategory::Wants,
            "Movie",
            date(2024, 2, 3),
        );
        assert_eq!(txn.expense_category(), Some(ExpenseCategory::Wants));
        assert_eq!(txn.category, "Wants");

        let income = Transaction::income(Money::from_cents(100), "Wants", "", date(2024, 2, 3));
        assert_eq!(income.expense_category(), None);
    }

    #[test]
    fn test_signed_amount() {
        let d = date(2024, 1, 1);
        let income = Transaction::income(Money::from_cents(500), "Salary", "Pay", d);
        let expense =
            Transaction::expense(Money::from_cents(300), ExpenseCategory::Needs, "Food", d);

        assert_eq!(income.signed_amount().cents(), 500);
        assert_eq!(expense.signed_amount().cents(), -300);
        assert!(income.is_income());
        assert!(expense.is_expense());
    }

    #[test]
    fn test_display() {
        let txn =
            Transaction::income(Money::from_cents(100_000), "Salary", "Pay", date(2024, 1, 1));
        assert_eq!(txn.to_string(), "2024-01-01 Income $1000.00 (Salary)");
    }
}
