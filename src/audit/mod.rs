//! Audit logging system for My Wallet
//!
//! Records every add, update and delete on the ledger with before/after
//! values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one operation with timestamp, ledger position, and
//!   optional before/after values.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//! - `diff_expenses`: human-readable summary of an in-place edit.
//!
//! Positions recorded in the log are the positions at the time of the
//! operation; later deletions shift them.

mod diff;
mod entry;
mod logger;

pub use diff::diff_expenses;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
