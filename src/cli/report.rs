//! CLI commands for reports
//!
//! Dashboard summary, expense breakdown and the audit history.

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_summary};
use crate::error::{KakeiboResult, ValidationError};
use crate::models::Month;
use crate::reports::{CategoryBreakdown, Summary};
use crate::storage::Storage;

/// Print the four dashboard totals
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> KakeiboResult<()> {
    let summary = Summary::generate(storage)?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print the expense breakdown chart, optionally for one month ("current" allowed)
pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> KakeiboResult<()> {
    let month = match month.as_deref() {
        None => None,
        Some("current") => Some(Month::current()),
        Some(text) => Some(
            Month::parse(text).map_err(|_| ValidationError::InvalidMonth(text.to_string()))?,
        ),
    };

    let breakdown = CategoryBreakdown::generate(storage, month)?;
    print!(
        "{}",
        format_breakdown(&breakdown, &settings.currency_symbol, settings.bar_width)
    );
    Ok(())
}

/// Print the most recent audit log entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> KakeiboResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
