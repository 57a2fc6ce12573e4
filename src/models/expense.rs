//! Expense model
//!
//! An expense is a dated, categorized amount with a free-text description.
//! Records carry their position in the ledger as `id`; that position shifts
//! whenever an earlier record is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::ValidationError;

/// The validated contents of an expense, without its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Date as entered (ISO-like, not validated)
    pub date: String,

    /// Category as entered; grouping is exact and case-sensitive
    pub category: String,

    /// Amount of the expense
    pub amount: Money,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }
}

/// An expense together with its current ledger position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Current position in the ledger, not a durable identifier
    pub id: usize,

    #[serde(flatten)]
    pub expense: Expense,
}

impl ExpenseRecord {
    pub fn new(id: usize, expense: Expense) -> Self {
        Self { id, expense }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({})",
            self.id,
            self.expense.date,
            self.expense.category,
            self.expense.amount,
            self.expense.description
        )
    }
}

/// Raw, unvalidated expense fields as supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Validate the input and convert it into an [`Expense`]
    ///
    /// Every field is checked for presence before the amount is parsed, so an
    /// input that is both incomplete and has a bad amount reports the missing
    /// field.
    pub fn validate(&self) -> Result<Expense, ValidationError> {
        let fields = [
            ("date", &self.date),
            ("category", &self.category),
            ("amount", &self.amount),
            ("description", &self.description),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(name));
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| ValidationError::InvalidAmount(self.amount.clone()))?;

        Ok(Expense::new(
            self.date.clone(),
            self.category.clone(),
            amount,
            self.description.clone(),
        ))
    }
}
