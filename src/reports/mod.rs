//! Reports for My Wallet
//!
//! Read-only aggregations over the expense ledger.

pub mod summary;

pub use summary::CategorySummary;
