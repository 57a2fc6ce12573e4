//! Storage layer for My Wallet
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation, plus the audit trail of every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, EXPENSE_COLUMNS};
pub use file_io::{read_csv, write_csv_atomic};

use std::path::PathBuf;

use crate::audit::{diff_expenses, AuditEntry, AuditLogger};
use crate::config::paths::WalletPaths;
use crate::error::WalletError;
use crate::models::ExpenseRecord;

/// Main storage coordinator: the expense table and its audit log
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance backed by `store_path`
    pub fn new(paths: WalletPaths, store_path: PathBuf) -> Result<Self, WalletError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(store_path),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Create a Storage instance using the default store location
    pub fn with_default_store(paths: WalletPaths) -> Result<Self, WalletError> {
        let store_path = paths.expenses_file();
        Self::new(paths, store_path)
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), WalletError> {
        self.expenses.load()
    }

    /// Record the creation of an expense
    pub fn log_create(&self, record: &ExpenseRecord) -> Result<(), WalletError> {
        self.audit
            .log(&AuditEntry::create(record.id, Some(label(record)), record))
    }

    /// Record an in-place edit of an expense
    pub fn log_update(
        &self,
        before: &ExpenseRecord,
        after: &ExpenseRecord,
    ) -> Result<(), WalletError> {
        let diff = diff_expenses(&before.expense, &after.expense);
        self.audit.log(&AuditEntry::update(
            after.id,
            Some(label(after)),
            before,
            after,
            diff,
        ))
    }

    /// Record the deletion of an expense
    pub fn log_delete(&self, record: &ExpenseRecord) -> Result<(), WalletError> {
        self.audit
            .log(&AuditEntry::delete(record.id, Some(label(record)), record))
    }
}

fn label(record: &ExpenseRecord) -> String {
    format!("{} {}", record.expense.category, record.expense.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::with_default_store(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.expenses.path(),
            temp_dir.path().join("data").join("expenses.csv")
        );
    }

    #[test]
    fn test_audit_helpers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::with_default_store(paths).unwrap();

        let before = ExpenseRecord::new(
            0,
            Expense::new("2024-01-05", "Food", Money::from_cents(1250), "Lunch"),
        );
        let mut after = before.clone();
        after.expense.amount = Money::from_cents(1300);

        storage.log_create(&before).unwrap();
        storage.log_update(&before, &after).unwrap();
        storage.log_delete(&after).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label.as_deref(), Some("Food $12.50"));
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("amount: 12.50 -> 13.00")
        );
        assert_eq!(entries[2].operation, Operation::Delete);
    }
}
