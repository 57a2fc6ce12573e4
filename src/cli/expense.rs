//! Expense CLI commands
//!
//! Implements the command-line front end of the ledger: each command calls
//! one ledger operation and prints the result.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{WalletError, WalletResult};
use crate::models::ExpenseInput;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (see `wallet categories` for suggestions)
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an expense in place; omitted fields keep their current value
    Update {
        /// Expense id as shown by `wallet list`
        id: Option<usize>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an expense; later ids shift down by one
    Delete {
        /// Expense id as shown by `wallet list`
        id: Option<usize>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Show category-wise sums and the total
    Summary {
        /// Print as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Show the suggested categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> WalletResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let input = ExpenseInput::new(date, category, amount, description);

            let record = match service.add(&input) {
                Err(e) if silenced(settings, &e) => return Ok(()),
                result => result?,
            };

            println!("Expense added successfully!");
            println!("{}", format_expense_details(&record, symbol));
            print!("{}", format_expense_table(&service.list()?, symbol));
        }

        ExpenseCommands::Update {
            id,
            date,
            category,
            amount,
            description,
        } => {
            let input = match id {
                Some(id) => service.merge_input(id, date, category, amount, description)?,
                None => ExpenseInput::new(
                    date.unwrap_or_default(),
                    category.unwrap_or_default(),
                    amount.unwrap_or_default(),
                    description.unwrap_or_default(),
                ),
            };

            let record = match service.update(id, &input) {
                Err(e) if silenced(settings, &e) => return Ok(()),
                result => result?,
            };

            println!("Expense updated successfully!");
            println!("{}", format_expense_details(&record, symbol));
            print!("{}", format_expense_table(&service.list()?, symbol));
        }

        ExpenseCommands::Delete { id, force } => {
            let id = id.ok_or(WalletError::NotSelected)?;

            if !force {
                let record = service.get(id)?;
                println!("About to delete:");
                println!("{}", format_expense_details(&record, symbol));
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            service.delete(Some(id))?;
            println!("Expense deleted successfully!");
            print!("{}", format_expense_table(&service.list()?, symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(&service.list()?, symbol));
        }

        ExpenseCommands::Summary { csv } => {
            let summary = service.summarize()?;
            if csv {
                summary.export_csv(&mut std::io::stdout())?;
            } else {
                print!("{}", summary.format_terminal(symbol));
            }
        }

        ExpenseCommands::Categories => {
            println!("Suggested categories:");
            for category in &settings.suggested_categories {
                println!("  {}", category);
            }
            println!();
            println!("Any other non-empty category is accepted as typed.");
        }
    }

    Ok(())
}

/// Today's date in the store's date format
fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Whether an error is suppressed by the legacy quiet-amount setting
fn silenced(settings: &Settings, err: &WalletError) -> bool {
    settings.silent_invalid_amount && err.is_invalid_amount()
}
