//! Core data models for Kakeibo
//!
//! The ledger's transactions, savings goals, the money type both use, and
//! the calendar month reports are scoped to.

pub mod fields;
pub mod goal;
pub mod money;
pub mod period;
pub mod transaction;

pub use goal::Goal;
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use transaction::{ExpenseCategory, Transaction, TransactionKind};
