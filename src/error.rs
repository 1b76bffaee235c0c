//! Custom error types for Kakeibo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons a form submission is rejected before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank
    #[error("Please fill in all fields: '{0}' is empty")]
    MissingField(&'static str),

    /// A numeric field did not parse
    #[error("Invalid amount for '{field}': '{value}'")]
    InvalidAmount { field: &'static str, value: String },

    /// A numeric field parsed but is below zero
    #[error("Amount for '{field}' cannot be negative")]
    NegativeAmount { field: &'static str },

    /// A numeric field is above the largest accepted amount
    #[error("Amount for '{field}' exceeds the maximum of {max}")]
    AmountTooLarge { field: &'static str, max: String },

    /// A date field is not YYYY-MM-DD
    #[error("Invalid date for '{field}': '{value}'. Use YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    /// Transaction type other than Income/Expense
    #[error("Unknown transaction type '{0}'. Use Income or Expense")]
    UnknownKind(String),

    /// Expense category outside the fixed set
    #[error("Unknown expense category '{0}'. Use Needs, Wants, Culture or Unplanned")]
    UnknownCategory(String),

    /// Report month filter is not YYYY-MM
    #[error("Invalid month '{0}'. Use YYYY-MM")]
    InvalidMonth(String),
}

/// The main error type for Kakeibo operations
#[derive(Error, Debug)]
pub enum KakeiboError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Rejected form input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Expense category with no breakdown bucket
    #[error("Expense category has no breakdown bucket: {0}")]
    UnknownCategory(String),

    /// A report total does not fit in the money type
    #[error("Amount overflow: {0} is too large to total")]
    Overflow(String),

    /// Storage errors (including malformed rows on load)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl KakeiboError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Build a storage error pointing at a row of a data file
    pub fn malformed_row(
        file: &std::path::Path,
        line: u64,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Storage(format!(
            "Malformed row in {} at line {}: {}",
            file.display(),
            line,
            reason
        ))
    }
}

impl From<std::io::Error> for KakeiboError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KakeiboError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for KakeiboError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Kakeibo operations
pub type KakeiboResult<T> = Result<T, KakeiboError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = KakeiboError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: KakeiboError = ValidationError::MissingField("Amount").into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Please fill in all fields: 'Amount' is empty"
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let err = ValidationError::InvalidDate {
            field: "Date",
            value: "2024/13/40".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date for 'Date': '2024/13/40'. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_malformed_row() {
        let err = KakeiboError::malformed_row(Path::new("goals.csv"), 3, "bad amount");
        assert_eq!(
            err.to_string(),
            "Storage error: Malformed row in goals.csv at line 3: bad amount"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KakeiboError = io_err.into();
        assert!(matches!(err, KakeiboError::Io(_)));
    }
}
