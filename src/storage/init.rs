//! Storage initialization
//!
//! Handles first-run setup: directories plus header-only data files.

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

use super::csv_file::ensure_with_header;
use super::goals::GOAL_HEADER;
use super::transactions::TRANSACTION_HEADER;

/// Initialize storage for a fresh installation
///
/// Existing files are never rewritten. Returns `true` if any file was created.
pub fn initialize_storage(paths: &KakeiboPaths) -> Result<bool, KakeiboError> {
    paths.ensure_directories()?;

    let created_ledger = ensure_with_header(paths.transactions_file(), TRANSACTION_HEADER)?;
    let created_goals = ensure_with_header(paths.goals_file(), GOAL_HEADER)?;

    Ok(created_ledger || created_goals)
}
