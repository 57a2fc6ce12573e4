use anyhow::Result;
use clap::{Parser, Subcommand};

use my_wallet::cli::{handle_expense_command, ExpenseCommands};
use my_wallet::config::{paths::WalletPaths, settings::Settings};
use my_wallet::storage::Storage;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Personal expense ledger backed by a CSV file",
    long_about = "My Wallet records, edits and summarizes personal expenses. \
                  Expenses are kept in a CSV file that is rewritten after \
                  every change. Ids are positions: deleting an expense \
                  renumbers the ones after it, so check `wallet list` before \
                  updating or deleting."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Write a settings file with the defaults, if none exists
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone(), settings.store_path(&paths))?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            if paths.settings_file().exists() {
                println!("Already initialized: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("My Wallet Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Expense store:    {}", storage.expenses.path().display());
            println!("Audit log:        {}", storage.audit().path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Silent invalid amount: {}", settings.silent_invalid_amount);
            println!(
                "  Suggested categories:  {}",
                settings.suggested_categories.join(", ")
            );
        }
        None => {
            println!("My Wallet - personal expense ledger");
            println!();
            println!("Run 'wallet --help' for usage information.");
            println!("Run 'wallet add 12.50 -c Food -m Lunch' to record an expense.");
        }
    }

    Ok(())
}
