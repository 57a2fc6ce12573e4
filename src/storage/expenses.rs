//! Expense repository for CSV storage
//!
//! Holds the ordered expense table in memory and flushes it in full to
//! expenses.csv. A record's id is its index in the table, so removing a row
//! renumbers every row after it.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use csv::StringRecord;

use crate::error::WalletError;
use crate::models::{Expense, ExpenseRecord, Money};

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of the expense store
pub const EXPENSE_COLUMNS: [&str; 5] = ["id", "date", "category", "amount", "description"];

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository bound to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing whatever is in memory
    ///
    /// A missing file yields an empty table. A file whose header or rows do
    /// not match the expected columns is reported as corrupt and leaves the
    /// in-memory table untouched.
    pub fn load(&self) -> Result<(), WalletError> {
        let expenses = match read_csv(&self.path)? {
            None => Vec::new(),
            Some(table) if table.header.is_empty() => Vec::new(),
            Some(table) => {
                check_header(&table.header)?;
                table
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(line, row)| parse_row(line, row))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let mut data = self.data.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = expenses;

        Ok(())
    }

    /// Save every expense to disk, rewriting the whole file
    pub fn save(&self) -> Result<(), WalletError> {
        let data = self.data.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let rows = data.iter().enumerate().map(|(id, expense)| {
            vec![
                id.to_string(),
                expense.date.clone(),
                expense.category.clone(),
                expense.amount.to_plain_string(),
                expense.description.clone(),
            ]
        });

        write_csv_atomic(&self.path, &EXPENSE_COLUMNS, rows)
    }

    /// Get the record at a position
    pub fn get(&self, id: usize) -> Result<Option<ExpenseRecord>, WalletError> {
        let data = self.data.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(id).cloned().map(|e| ExpenseRecord::new(id, e)))
    }

    /// Get all records in ledger order, numbered by position
    pub fn get_all(&self) -> Result<Vec<ExpenseRecord>, WalletError> {
        let data = self.data.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, e)| ExpenseRecord::new(id, e))
            .collect())
    }

    /// Append an expense, returning it with its assigned position
    pub fn push(&self, expense: Expense) -> Result<ExpenseRecord, WalletError> {
        let mut data = self.data.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = data.len();
        data.push(expense.clone());
        Ok(ExpenseRecord::new(id, expense))
    }

    /// Overwrite the expense at a position, returning the previous record
    pub fn replace(&self, id: usize, expense: Expense) -> Result<ExpenseRecord, WalletError> {
        let mut data = self.data.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let slot = data
            .get_mut(id)
            .ok_or_else(|| WalletError::expense_not_found(id))?;
        let before = std::mem::replace(slot, expense);
        Ok(ExpenseRecord::new(id, before))
    }

    /// Remove the expense at a position; later records shift down by one
    pub fn remove(&self, id: usize) -> Result<ExpenseRecord, WalletError> {
        let mut data = self.data.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if id >= data.len() {
            return Err(WalletError::expense_not_found(id));
        }
        Ok(ExpenseRecord::new(id, data.remove(id)))
    }

    /// Put an expense back at a position, shifting later records up
    pub fn insert(&self, id: usize, expense: Expense) -> Result<(), WalletError> {
        let mut data = self.data.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if id > data.len() {
            return Err(WalletError::expense_not_found(id));
        }
        data.insert(id, expense);
        Ok(())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, WalletError> {
        let data = self.data.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

fn check_header(header: &StringRecord) -> Result<(), WalletError> {
    if header.iter().eq(EXPENSE_COLUMNS.iter().copied()) {
        Ok(())
    } else {
        Err(WalletError::StoreCorrupt(format!(
            "expected header {:?}, found {:?}",
            EXPENSE_COLUMNS.join(","),
            header.iter().collect::<Vec<_>>().join(",")
        )))
    }
}

/// Parse one data row; `line` is the zero-based data row index
///
/// The stored id column is ignored: positions come from row order.
fn parse_row(line: usize, row: &StringRecord) -> Result<Expense, WalletError> {
    let field = |i: usize| row.get(i).unwrap_or_default();

    let amount = Money::parse(field(3)).map_err(|_| {
        WalletError::StoreCorrupt(format!(
            "row {}: amount {:?} is not a number",
            line + 1,
            field(3)
        ))
    })?;

    Ok(Expense::new(field(1), field(2), amount, field(4)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn lunch() -> Expense {
        Expense::new("2024-01-05", "Food", Money::from_cents(1250), "Lunch")
    }

    fn rent() -> Expense {
        Expense::new("2024-01-06", "Rent", Money::from_cents(50000), "Jan rent")
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_push_assigns_positions() {
        let (_temp_dir, repo) = create_test_repo();

        assert_eq!(repo.push(lunch()).unwrap().id, 0);
        assert_eq!(repo.push(rent()).unwrap().id, 1);
        assert_eq!(repo.get(1).unwrap().unwrap().expense, rent());
        assert!(repo.get(2).unwrap().is_none());
    }

    #[test]
    fn test_remove_renumbers() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();
        repo.push(rent()).unwrap();

        let removed = repo.remove(0).unwrap();
        assert_eq!(removed.expense, lunch());

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 0);
        assert_eq!(all[0].expense, rent());
    }

    #[test]
    fn test_insert_restores_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();
        repo.push(rent()).unwrap();

        let removed = repo.remove(0).unwrap();
        repo.insert(removed.id, removed.expense).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].expense, lunch());
        assert_eq!(all[1].expense, rent());
        assert!(repo.insert(5, lunch()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_out_of_range_is_not_found() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();

        assert!(repo.remove(5).unwrap_err().is_not_found());
        assert!(repo.replace(1, rent()).unwrap_err().is_not_found());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_returns_previous() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();

        let before = repo.replace(0, rent()).unwrap();
        assert_eq!(before.expense, lunch());
        assert_eq!(repo.get(0).unwrap().unwrap().expense, rent());
    }

    #[test]
    fn test_save_format() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();
        repo.push(Expense::new("2024-01-07", "Other", Money::from_cents(300), "Pens, paper"))
            .unwrap();
        repo.save().unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            contents,
            "id,date,category,amount,description\n\
             0,2024-01-05,Food,12.50,Lunch\n\
             1,2024-01-07,Other,3.00,\"Pens, paper\"\n"
        );
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.push(lunch()).unwrap();
        repo.push(rent()).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_stored_ids_are_ignored() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            "id,date,category,amount,description\n\
             ,2024-01-05,Food,12.5,Lunch\n\
             9,2024-01-06,Rent,500,Jan rent\n",
        )
        .unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, 0);
        assert_eq!(all[0].expense.amount, Money::from_cents(1250));
        assert_eq!(all[1].id, 1);
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_wrong_header_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "Date,Category,Amount\n2024-01-05,Food,1\n").unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, WalletError::StoreCorrupt(_)));
    }

    #[test]
    fn test_bad_amount_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            "id,date,category,amount,description\n0,2024-01-05,Food,lots,Lunch\n",
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, WalletError::StoreCorrupt(_)));
        assert_eq!(repo.count().unwrap(), 0);
    }
}
