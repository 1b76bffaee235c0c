//! Kakeibo - personal finance tracker
//!
//! This library provides the core of the Kakeibo tracker: an income and
//! expense ledger plus savings goals, each persisted as a CSV file, with the
//! dashboard summary and per-category expense breakdown derived from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, months)
//! - `storage`: CSV file storage layer
//! - `services`: Form validation and the add/list operations
//! - `reports`: Summary and category breakdown
//! - `display`: Terminal formatting
//! - `export`: JSON/YAML export
//! - `audit`: Audit logging system
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::paths::KakeiboPaths;
//! use kakeibo::reports::Summary;
//! use kakeibo::storage::Storage;
//!
//! let mut storage = Storage::new(KakeiboPaths::new()?)?;
//! storage.load_all()?;
//! let summary = Summary::generate(&storage)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::KakeiboError;
