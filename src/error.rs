//! Custom error types for My Wallet
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons an expense input is rejected before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The amount did not parse as a number
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// The main error type for My Wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A mutating operation was attempted without a selected record
    #[error("No expense selected")]
    NotSelected,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The persisted store exists but does not have the expected shape
    #[error("Expense store is corrupt: {0}")]
    StoreCorrupt(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// Create a "not found" error for an expense position
    pub fn expense_not_found(position: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: position.to_string(),
        }
    }

    /// Shorthand for a missing-field validation error
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation(ValidationError::MissingField(field))
    }

    /// Shorthand for an invalid-amount validation error
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidAmount(raw.into()))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is specifically an unparsable amount
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::InvalidAmount(_)))
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WalletError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for My Wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
