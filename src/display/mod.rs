//! Display formatting for terminal output
//!
//! Plain-text renderings of the dashboard, the ledger register, goals and
//! the expense breakdown chart.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::{format_goal_line, format_goal_list};
pub use report::{format_breakdown, format_summary};
pub use transaction::{format_transaction_register, format_transaction_row};
