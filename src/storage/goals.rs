//! Goal repository backed by goals.csv

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult, ValidationError};
use crate::models::fields::{parse_amount, parse_date, DATE_FORMAT};
use crate::models::Goal;

use super::csv_file::{append_row, ensure_with_header, read_rows};

/// Column names of the goals file
pub const GOAL_HEADER: &[&str] = &["Goal Name", "Target Amount", "Target Date", "Amount Saved"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRow {
    #[serde(rename = "Goal Name")]
    name: String,
    #[serde(rename = "Target Amount")]
    target_amount: String,
    #[serde(rename = "Target Date")]
    target_date: String,
    #[serde(rename = "Amount Saved")]
    amount_saved: String,
}

impl From<&Goal> for GoalRow {
    fn from(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.to_decimal_string(),
            target_date: goal.target_date.format(DATE_FORMAT).to_string(),
            amount_saved: goal.amount_saved.to_decimal_string(),
        }
    }
}

impl TryFrom<GoalRow> for Goal {
    type Error = ValidationError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        Ok(Goal {
            target_amount: parse_amount("Target Amount", &row.target_amount)?,
            target_date: parse_date("Target Date", &row.target_date)?,
            amount_saved: parse_amount("Amount Saved", &row.amount_saved)?,
            name: row.name,
        })
    }
}

/// Repository for the append-only goal list
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<Vec<Goal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn ensure_file(&self) -> KakeiboResult<bool> {
        ensure_with_header(&self.path, GOAL_HEADER)
    }

    /// Replace the in-memory goals with the file contents
    pub fn load(&self) -> KakeiboResult<()> {
        let rows: Vec<(u64, GoalRow)> = read_rows(&self.path, GOAL_HEADER)?;

        let loaded = rows
            .into_iter()
            .map(|(line, row)| {
                Goal::try_from(row).map_err(|e| KakeiboError::malformed_row(&self.path, line, e))
            })
            .collect::<KakeiboResult<Vec<_>>>()?;

        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded;

        Ok(())
    }

    /// Append a goal to the file, then to memory
    pub fn append(&self, goal: Goal) -> KakeiboResult<()> {
        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        append_row(&self.path, GOAL_HEADER, &GoalRow::from(&goal))?;
        data.push(goal);

        Ok(())
    }

    pub fn get_all(&self) -> KakeiboResult<Vec<Goal>> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    pub fn count(&self) -> KakeiboResult<usize> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
