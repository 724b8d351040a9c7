//! Core business logic module
//!
//! This module contains the account ledger and its session-keyed storage:
//! - `account` - The account ledger: balances, holdings, transaction log
//! - `session` - Session-keyed account storage for presentation layers

pub mod account;
pub mod session;

pub use account::Account;
pub use session::SessionStore;
