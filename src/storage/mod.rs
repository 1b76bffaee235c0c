//! Storage layer for Kakeibo
//!
//! Two append-only CSV files, each mirrored by an in-memory list that is
//! loaded wholesale at startup.

pub mod csv_file;
pub mod goals;
pub mod init;
pub mod transactions;

pub use goals::{GoalRepository, GOAL_HEADER};
pub use init::initialize_storage;
pub use transactions::{LedgerRepository, TRANSACTION_HEADER};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: KakeiboPaths,
    pub transactions: LedgerRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating header-only files if absent
    pub fn new(paths: KakeiboPaths) -> Result<Self, KakeiboError> {
        initialize_storage(&paths)?;

        Ok(Self {
            transactions: LedgerRepository::new(paths.transactions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an appended transaction or goal in the audit log
    pub fn log_added<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_name: impl Into<String>,
        record: &T,
    ) -> Result<(), KakeiboError> {
        self.audit
            .log(&AuditEntry::added(entity_type, entity_name, record))
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), KakeiboError> {
        self.transactions.load()?;
        self.goals.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(storage.paths().transactions_file().exists());
        assert!(storage.paths().goals_file().exists());

        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_log_added() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_added(EntityType::Goal, "Bike", &serde_json::json!({"name": "Bike"}))
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_name, "Bike");
    }
}
