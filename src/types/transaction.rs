//! Transaction-related types for the trading ledger
//!
//! This module defines the transaction log entries recorded by the account
//! ledger and the parsed operation commands consumed by it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of shares of a single symbol
///
/// Share counts are whole, non-negative numbers; a negative quantity is
/// unrepresentable and a zero quantity is rejected at validation time.
pub type Quantity = u32;

/// The kind of a recorded ledger transaction
///
/// Each variant carries the data captured at execution time. Buy and sell
/// entries include the unit price the oracle quoted when the operation ran,
/// so the log stays meaningful even if prices were to change later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds credited to the cash balance
    Deposit {
        /// The deposited amount
        amount: Decimal,
    },

    /// Funds debited from the cash balance
    Withdraw {
        /// The withdrawn amount
        amount: Decimal,
    },

    /// Shares purchased at the quoted unit price
    Buy {
        /// Ticker symbol of the purchased shares
        symbol: String,
        /// Number of shares purchased
        quantity: Quantity,
        /// Unit price quoted at execution time
        unit_price: Decimal,
    },

    /// Shares sold at the quoted unit price
    Sell {
        /// Ticker symbol of the sold shares
        symbol: String,
        /// Number of shares sold
        quantity: Quantity,
        /// Unit price quoted at execution time
        unit_price: Decimal,
    },
}

impl TransactionKind {
    /// Lowercase label for report output ("deposit", "withdraw", "buy", "sell")
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit { .. } => "deposit",
            TransactionKind::Withdraw { .. } => "withdraw",
            TransactionKind::Buy { .. } => "buy",
            TransactionKind::Sell { .. } => "sell",
        }
    }
}

/// A single entry in the account's append-only transaction log
///
/// The timestamp is assigned when the entry is recorded; entries are never
/// edited or removed, and insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// What happened, with the values captured at execution time
    #[serde(flatten)]
    pub kind: TransactionKind,

    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Record a transaction now
    ///
    /// Stamps the entry with the current UTC time.
    pub fn record(kind: TransactionKind) -> Self {
        Transaction {
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// A parsed ledger command, not yet validated against account state
///
/// Produced by the CSV input layer and routed to the matching typed account
/// method by [`crate::core::Account::apply`]. Field-level syntax (amount and
/// quantity parse, required fields present) is checked during conversion;
/// business rules (positive amounts, sufficient funds, known symbols) are the
/// ledger's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Credit funds to the cash balance
    Deposit { amount: Decimal },

    /// Debit funds from the cash balance
    Withdraw { amount: Decimal },

    /// Purchase shares at the oracle's current price
    Buy { symbol: String, quantity: Quantity },

    /// Sell held shares at the oracle's current price
    Sell { symbol: String, quantity: Quantity },
}
