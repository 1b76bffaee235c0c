//! Service layer for Kakeibo
//!
//! The service layer sits on top of the storage layer: it validates form
//! input before anything is written and records each addition in the audit
//! log.

pub mod form;
pub mod goal;
pub mod transaction;

pub use form::{GoalForm, TransactionForm};
pub use goal::GoalService;
pub use transaction::{TransactionFilter, TransactionService};

use crate::error::KakeiboError;

/// A record that has been written to its data file
///
/// The row is saved even when `audit_error` is set; only the audit log entry
/// is missing.
#[derive(Debug)]
pub struct Added<T> {
    pub record: T,
    pub audit_error: Option<KakeiboError>,
}
