//! Audit logging system for Kakeibo
//!
//! Records every transaction and goal that is added, in an append-only
//! line-delimited JSON log next to the data directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::added(EntityType::Goal, &goal.name, &goal))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType};
pub use logger::AuditLogger;
