//! Reports module for Kakeibo
//!
//! The dashboard summary and the expense breakdown by category.

pub mod breakdown;
pub mod summary;

pub use breakdown::{CategoryBreakdown, CategoryBucket};
pub use summary::Summary;
