use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo::cli::{
    handle_breakdown_command, handle_export_command, handle_goal_command,
    handle_history_command, handle_summary_command, handle_transaction_command, ExportFormat,
    GoalCommands, TransactionCommands,
};
use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Personal finance tracker in the kakeibo style",
    long_about = "Kakeibo records income, expenses and savings goals in plain CSV \
                  files and shows where the money went: total income, total \
                  expenses, goal savings, remaining balance and a breakdown of \
                  spending into Needs, Wants, Culture and Unplanned."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show income, expenses, savings and remaining balance
    Summary,

    /// Show expenses grouped by category
    Breakdown {
        /// Limit to one month (YYYY-MM, or "current")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export all data to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent additions from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Breakdown { month }) => {
            handle_breakdown_command(&storage, &settings, month)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, output, format, pretty)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Kakeibo at: {}", paths.base_dir().display());
            kakeibo::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Data files:");
            println!("  {}", paths.transactions_file().display());
            println!("  {}", paths.goals_file().display());
            println!();
            println!("Run 'kakeibo transaction add --help' to record your first entry.");
        }
        Some(Commands::Config) => {
            println!("Kakeibo Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Goals file:        {}", paths.goals_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:         {}", settings.currency_symbol);
            println!("  Default income category: {}", settings.default_income_category);
            println!("  Bar width:               {}", settings.bar_width);
        }
        None => {
            handle_summary_command(&storage, &settings)?;
            println!();
            handle_breakdown_command(&storage, &settings, None)?;
            println!();
            println!("Run 'kakeibo --help' for usage information.");
        }
    }

    Ok(())
}
