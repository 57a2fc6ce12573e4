//! Service layer for My Wallet
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and audit logging.

pub mod ledger;

pub use ledger::LedgerService;
