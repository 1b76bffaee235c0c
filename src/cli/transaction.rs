//! Transaction CLI commands
//!
//! `add` is the command-line equivalent of the "Add Transaction" form: each
//! field arrives as raw text and goes through the same validation.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::{KakeiboResult, ValidationError};
use crate::models::fields::{parse_kind, DATE_FORMAT};
use crate::models::{Month, TransactionKind};
use crate::reports::Summary;
use crate::services::{TransactionFilter, TransactionForm, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: Income or Expense
        kind: String,
        /// Amount (e.g., "200" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Category: free text for income (defaults to the configured income
        /// category), one of Needs, Wants, Culture, Unplanned for expenses
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by type (Income or Expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Only transactions in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of most recent transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> KakeiboResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let category = category.unwrap_or_else(|| {
                if matches!(parse_kind(&kind), Ok(TransactionKind::Income)) {
                    settings.default_income_category.clone()
                } else {
                    String::new()
                }
            });
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(DATE_FORMAT)
                    .to_string()
            });

            let form = TransactionForm::new(kind, amount, category, description, date);
            let added = service.add(&form)?;
            let txn = &added.record;

            println!("Added transaction:");
            println!("  Type:        {}", txn.kind);
            println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
            println!("  Category:    {}", txn.category);
            println!("  Description: {}", txn.description);
            println!("  Date:        {}", txn.date.format(DATE_FORMAT));

            if let Some(e) = &added.audit_error {
                println!("\nWarning: transaction saved but not recorded in history: {}", e);
            }

            let summary = Summary::generate(storage)?;
            println!();
            println!(
                "Remaining Balance: {}",
                summary.balance.format_with_symbol(symbol)
            );
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(month) = month {
                let month =
                    Month::parse(&month).map_err(|_| ValidationError::InvalidMonth(month))?;
                filter = filter.month(month);
            }

            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_register(&transactions, symbol));
            println!(
                "\nShowing {} of {} transactions",
                transactions.len(),
                service.count()?
            );
        }
    }

    Ok(())
}
