//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction log entries, parsed operations, quantities
//! - `error`: Error types for the trading ledger

pub mod error;
pub mod transaction;

pub use error::LedgerError;
pub use transaction::{Operation, Quantity, Transaction, TransactionKind};
