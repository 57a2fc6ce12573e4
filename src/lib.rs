//! My Wallet - personal expense ledger backed by a CSV file
//!
//! This library records, edits and summarizes personal expenses. The ledger
//! is an ordered table of expenses persisted in full to a CSV file after
//! every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and the money type
//! - `storage`: CSV file storage layer
//! - `services`: The ledger operations
//! - `reports`: Category summary
//! - `audit`: Audit logging system
//! - `display` and `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,no_run
//! use my_wallet::config::WalletPaths;
//! use my_wallet::models::ExpenseInput;
//! use my_wallet::services::LedgerService;
//! use my_wallet::storage::Storage;
//!
//! # fn main() -> Result<(), my_wallet::WalletError> {
//! let storage = Storage::with_default_store(WalletPaths::new()?)?;
//! let ledger = LedgerService::new(&storage);
//! ledger.load()?;
//! ledger.add(&ExpenseInput::new("2024-01-05", "Food", "12.50", "Lunch"))?;
//! println!("total: {}", ledger.summarize()?.total);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ValidationError, WalletError, WalletResult};
