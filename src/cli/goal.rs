//! Goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_line, format_goal_list};
use crate::error::KakeiboResult;
use crate::reports::Summary;
use crate::services::{GoalForm, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Save a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target_amount: String,
        /// Target date (YYYY-MM-DD)
        target_date: String,
        /// Amount saved so far
        #[arg(allow_hyphen_values = true)]
        amount_saved: String,
    },
    /// List saved goals
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> KakeiboResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target_amount,
            target_date,
            amount_saved,
        } => {
            let added = service.add(&GoalForm::new(
                name,
                target_amount,
                target_date,
                amount_saved,
            ))?;

            println!("Saved goal:");
            println!(
                "  {}",
                format_goal_line(&added.record, symbol, settings.bar_width)
            );
            if let Some(e) = &added.audit_error {
                println!("\nWarning: goal saved but not recorded in history: {}", e);
            }

            let summary = Summary::generate(storage)?;
            println!();
            println!(
                "Savings for Goals: {}",
                summary.savings.format_with_symbol(symbol)
            );
        }

        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_list(&goals, symbol, settings.bar_width));
        }
    }

    Ok(())
}
