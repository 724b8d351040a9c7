//! Trading Ledger Library
//! # Overview
//!
//! This library provides an in-memory trading account ledger with a CSV
//! batch replay pipeline.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Operation, LedgerError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::account`] - The account ledger: cash balance, holdings, and
//!     the append-only transaction log
//!   - [`core::session`] - Session-keyed account storage for presentation
//!     layers
//! - [`pricing`] - The price oracle capability and its fixed-table
//!   reference implementation
//! - [`io`] - CSV input parsing and report output
//! - [`replay`] - The batch pipeline tying input, account, and reports
//!   together
//!
//! # Operations
//!
//! The ledger supports four mutating operations:
//!
//! - **Deposit**: Credit funds to the cash balance
//! - **Withdraw**: Debit funds (requires sufficient cash)
//! - **Buy**: Purchase shares at the oracle's current price (requires
//!   sufficient cash and a known symbol)
//! - **Sell**: Sell held shares at the oracle's current price (requires
//!   sufficient holdings)
//!
//! and four read queries: portfolio value, gain/loss against the opening
//! deposit, a holdings snapshot, and the transaction history.
//!
//! # Guarantees
//!
//! After every operation: the cash balance is non-negative, no holding is
//! stored at quantity zero, and the transaction log has grown by exactly one
//! entry per successful mutation and by none per rejected one.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pricing;
pub mod replay;
pub mod types;

pub use crate::core::{Account, SessionStore};
pub use crate::io::{OperationReader, OperationRow};
pub use crate::pricing::{FixedPriceOracle, PriceOracle};
pub use crate::types::{LedgerError, Operation, Quantity, Transaction, TransactionKind};
