//! Expense display formatting
//!
//! Formats the expense table and single-record details for the terminal.

use crate::models::ExpenseRecord;

/// Format one expense as a table row
pub fn format_expense_row(record: &ExpenseRecord, currency_symbol: &str) -> String {
    format!(
        "{:>5}  {:12} {:16} {:>12}  {}",
        record.id,
        truncate(&record.expense.date, 12),
        truncate(&record.expense.category, 16),
        record.expense.amount.format_with_symbol(currency_symbol),
        record.expense.description
    )
}

/// Format the whole ledger as a table, in ledger order
pub fn format_expense_table(records: &[ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:12} {:16} {:>12}  {}\n",
        "Id", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record, currency_symbol));
        output.push('\n');
    }

    output.push_str(&format!("\n{} expense(s)\n", records.len()));
    output
}

/// Format the details of a single expense
pub fn format_expense_details(record: &ExpenseRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", record.id));
    output.push_str(&format!("Date:        {}\n", record.expense.date));
    output.push_str(&format!("Category:    {}\n", record.expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Description: {}\n", record.expense.description));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
