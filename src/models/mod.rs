//! Core data models for My Wallet
//!
//! This module contains the data structures of the expense domain: the
//! expense record, raw user input, and the fixed-point money type.

pub mod expense;
pub mod money;

pub use expense::{Expense, ExpenseInput, ExpenseRecord};
pub use money::{Money, MoneyParseError};
