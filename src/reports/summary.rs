//! Category Summary
//!
//! Sums expense amounts per category and overall. Categories are grouped by
//! exact string match: `"Food"` and `"food "` are separate groups.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{WalletError, WalletResult};
use crate::models::{ExpenseRecord, Money};
use crate::storage::Storage;

/// Category-wise sums plus the grand total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    /// Sum of amounts per category
    pub by_category: HashMap<String, Money>,
    /// Sum of all amounts
    pub total: Money,
    /// Number of records summarized
    pub record_count: usize,
}

impl CategorySummary {
    /// Summarize every expense currently in storage
    pub fn generate(storage: &Storage) -> WalletResult<Self> {
        let records = storage.expenses.get_all()?;
        Self::from_records(&records)
    }

    /// Summarize a list of records
    ///
    /// Fails with [`WalletError::Storage`] if a sum does not fit in `Money`.
    pub fn from_records(records: &[ExpenseRecord]) -> WalletResult<Self> {
        let mut by_category: HashMap<String, Money> = HashMap::new();
        let mut total = Money::zero();

        for record in records {
            let amount = record.expense.amount;
            let sum = by_category
                .entry(record.expense.category.clone())
                .or_insert_with(Money::zero);
            *sum = sum.checked_add(amount).ok_or_else(overflow)?;
            total = total.checked_add(amount).ok_or_else(overflow)?;
        }

        Ok(Self {
            by_category,
            total,
            record_count: records.len(),
        })
    }

    /// Sum for a single category, if any record uses it
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.by_category.get(category).copied()
    }

    /// Categories and their sums, sorted by category name
    pub fn sorted(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<_> = self
            .by_category
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Category-wise Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
        }

        for (category, amount) in self.sorted() {
            output.push_str(&format!(
                "{:24} {:>15}\n",
                category,
                amount.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:24} {:>15}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the summary as CSV rows of `category,amount`, ending with the total
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> WalletResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["category", "amount"])?;
        for (category, amount) in self.sorted() {
            wtr.write_record([category, amount.to_plain_string().as_str()])?;
        }
        wtr.write_record(["Total", self.total.to_plain_string().as_str()])?;

        wtr.flush()
            .map_err(|e| WalletError::Io(format!("Failed to write summary: {}", e)))?;
        Ok(())
    }
}

fn overflow() -> WalletError {
    WalletError::Storage("amount total overflows".into())
}
