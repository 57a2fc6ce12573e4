//! Ledger service
//!
//! Provides the expense ledger operations: add, update, delete, list and
//! summarize. Every mutation validates first, then changes the in-memory
//! table and rewrites the store. If the rewrite fails the in-memory change is
//! undone. The audit entry is written last and its failure is not reported,
//! since the change is already on disk.
//!
//! Record ids are positions. A delete shifts every later record down by one,
//! so callers must take ids from a fresh [`LedgerService::list`] before each
//! update or delete.

use crate::error::{WalletError, WalletResult};
use crate::models::{Expense, ExpenseInput, ExpenseRecord};
use crate::reports::CategorySummary;
use crate::storage::Storage;

/// Service for the expense ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the ledger from its store
    ///
    /// An absent store gives an empty ledger; an unreadable one is
    /// [`WalletError::StoreCorrupt`].
    pub fn load(&self) -> WalletResult<()> {
        self.storage.expenses.load()
    }

    /// Add a new expense at the end of the ledger
    pub fn add(&self, input: &ExpenseInput) -> WalletResult<ExpenseRecord> {
        let expense = input.validate()?;

        let record = self.storage.expenses.push(expense)?;
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.remove(record.id)?;
            return Err(e);
        }

        // Already persisted; a failed audit write must not report the add as failed
        let _ = self.storage.log_create(&record);

        Ok(record)
    }

    /// Overwrite the selected expense in place
    pub fn update(&self, selected: Option<usize>, input: &ExpenseInput) -> WalletResult<ExpenseRecord> {
        let id = selected.ok_or(WalletError::NotSelected)?;
        let expense = input.validate()?;

        let before = self.storage.expenses.replace(id, expense.clone())?;
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.replace(id, before.expense)?;
            return Err(e);
        }

        let after = ExpenseRecord::new(id, expense);
        let _ = self.storage.log_update(&before, &after);

        Ok(after)
    }

    /// Delete the selected expense, renumbering the records after it
    pub fn delete(&self, selected: Option<usize>) -> WalletResult<ExpenseRecord> {
        let id = selected.ok_or(WalletError::NotSelected)?;

        let removed = self.storage.expenses.remove(id)?;
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.insert(id, removed.expense)?;
            return Err(e);
        }

        let _ = self.storage.log_delete(&removed);

        Ok(removed)
    }

    /// Get the expense at a position
    pub fn get(&self, id: usize) -> WalletResult<ExpenseRecord> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| WalletError::expense_not_found(id))
    }

    /// List all expenses in ledger order with their current ids
    pub fn list(&self) -> WalletResult<Vec<ExpenseRecord>> {
        self.storage.expenses.get_all()
    }

    /// Sum amounts per category and overall
    pub fn summarize(&self) -> WalletResult<CategorySummary> {
        CategorySummary::generate(self.storage)
    }

    /// Count expenses
    pub fn count(&self) -> WalletResult<usize> {
        self.storage.expenses.count()
    }

    /// Build the input for an update from the current record and any
    /// replacement fields, as a form pre-filled by selection would
    pub fn merge_input(
        &self,
        id: usize,
        date: Option<String>,
        category: Option<String>,
        amount: Option<String>,
        description: Option<String>,
    ) -> WalletResult<ExpenseInput> {
        let Expense {
            date: old_date,
            category: old_category,
            amount: old_amount,
            description: old_description,
        } = self.get(id)?.expense;

        Ok(ExpenseInput::new(
            date.unwrap_or(old_date),
            category.unwrap_or(old_category),
            amount.unwrap_or_else(|| old_amount.to_plain_string()),
            description.unwrap_or(old_description),
        ))
    }
}
