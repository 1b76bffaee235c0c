//! Audit entry data structures
//!
//! The ledger and goal files are append-only, so every entry records a
//! creation: what was added, when, and the full record as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of records that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Goal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Goal => write!(f, "Goal"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the record was added (UTC)
    pub timestamp: DateTime<Utc>,

    pub entity_type: EntityType,

    /// Short human-readable label (goal name, or date and kind of a transaction)
    pub entity_name: String,

    /// JSON representation of the record as it was appended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for an appended record
    pub fn added<T: Serialize>(
        entity_type: EntityType,
        entity_name: impl Into<String>,
        record: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            entity_type,
            entity_name: entity_name.into(),
            record: serde_json::to_value(record).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] ADD {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.entity_type,
            self.entity_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Transaction.to_string(), "Transaction");
        assert_eq!(EntityType::Goal.to_string(), "Goal");
    }

    #[test]
    fn test_added_entry() {
        let data = json!({"name": "Bike", "amount_saved": 1500});
        let entry = AuditEntry::added(EntityType::Goal, "Bike", &data);

        assert_eq!(entry.entity_type, EntityType::Goal);
        assert_eq!(entry.entity_name, "Bike");
        assert_eq!(entry.record, Some(data));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::added(EntityType::Transaction, "2024-01-01 Income", &json!({}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"transaction\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.entity_type, EntityType::Transaction);
        assert_eq!(deserialized.entity_name, "2024-01-01 Income");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::added(EntityType::Goal, "Bike", &json!({}));
        let output = entry.format_human_readable();

        assert!(output.contains("ADD Goal Bike"));
        assert!(output.contains("UTC"));
    }
}
