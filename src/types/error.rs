//! Error types for the trading ledger
//!
//! All ledger errors are caller-input validation failures, not system
//! faults: none are retryable, none are transient. Every precondition
//! violation is reported to the caller before any state mutation occurs, so
//! a failed operation never leaves a partial effect behind.
//!
//! # Error Categories
//!
//! - **Amount/quantity validation**: non-positive deposits, withdrawals, or
//!   share counts
//! - **Balance violations**: withdrawals or purchases exceeding cash,
//!   sales exceeding held shares
//! - **Symbol resolution**: tickers the price oracle does not recognize
//! - **Arithmetic**: overflow in balance or cost calculations
//! - **Session lookup**: operations addressed to a session with no account

use crate::types::Quantity;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the trading ledger
///
/// Each variant carries the context needed to turn the failure into a
/// user-visible message; the ledger itself performs no logging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Share quantity was zero
    ///
    /// Negative quantities are unrepresentable at the type level; zero is
    /// the only invalid value that can reach the ledger.
    #[error("Invalid quantity {quantity}: must be greater than zero")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: Quantity,
    },

    /// Cash balance cannot cover a withdrawal or purchase
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Current cash balance
        available: Decimal,
        /// Amount the operation needed
        requested: Decimal,
    },

    /// The account holds fewer shares than a sale requires
    ///
    /// Includes the case of holding none at all.
    #[error("Insufficient holdings of {symbol}: held {held}, requested {requested}")]
    InsufficientHoldings {
        /// Ticker symbol of the attempted sale
        symbol: String,
        /// Shares currently held (zero when the symbol is absent)
        held: Quantity,
        /// Shares the sale required
        requested: Quantity,
    },

    /// The price oracle has no price for the symbol
    ///
    /// An unknown symbol is a hard error rather than a zero price; pricing
    /// an unknown symbol at zero would let a purchase succeed for free and
    /// corrupt portfolio valuation.
    #[error("Unknown symbol '{symbol}': no price available")]
    UnknownSymbol {
        /// The unrecognized ticker symbol
        symbol: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the account state intact.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// No account exists for the addressed session
    #[error("Session '{session_id}' not found")]
    SessionNotFound {
        /// The session id that had no live account
        session_id: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(quantity: Quantity) -> Self {
        LedgerError::InvalidQuantity { quantity }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an InsufficientHoldings error
    pub fn insufficient_holdings(symbol: &str, held: Quantity, requested: Quantity) -> Self {
        LedgerError::InsufficientHoldings {
            symbol: symbol.to_string(),
            held,
            requested,
        }
    }

    /// Create an UnknownSymbol error
    pub fn unknown_symbol(symbol: &str) -> Self {
        LedgerError::UnknownSymbol {
            symbol: symbol.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a SessionNotFound error
    pub fn session_not_found(session_id: &str) -> Self {
        LedgerError::SessionNotFound {
            session_id: session_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: Decimal::new(-500, 2) },
        "Invalid amount -5.00: must be greater than zero"
    )]
    #[case::invalid_quantity(
        LedgerError::InvalidQuantity { quantity: 0 },
        "Invalid quantity 0: must be greater than zero"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds {
            available: Decimal::new(10000, 2),
            requested: Decimal::new(15000, 2),
        },
        "Insufficient funds: available 100.00, requested 150.00"
    )]
    #[case::insufficient_holdings(
        LedgerError::InsufficientHoldings { symbol: "AAPL".to_string(), held: 1, requested: 2 },
        "Insufficient holdings of AAPL: held 1, requested 2"
    )]
    #[case::unknown_symbol(
        LedgerError::UnknownSymbol { symbol: "ZZZZ".to_string() },
        "Unknown symbol 'ZZZZ': no price available"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "buy".to_string() },
        "Arithmetic overflow in buy"
    )]
    #[case::session_not_found(
        LedgerError::SessionNotFound { session_id: "web-42".to_string() },
        "Session 'web-42' not found"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount(Decimal::ZERO),
        LedgerError::InvalidAmount { amount: Decimal::ZERO }
    )]
    #[case::invalid_quantity(
        LedgerError::invalid_quantity(0),
        LedgerError::InvalidQuantity { quantity: 0 }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(Decimal::new(10000, 2), Decimal::new(15000, 2)),
        LedgerError::InsufficientFunds {
            available: Decimal::new(10000, 2),
            requested: Decimal::new(15000, 2),
        }
    )]
    #[case::insufficient_holdings(
        LedgerError::insufficient_holdings("AAPL", 0, 1),
        LedgerError::InsufficientHoldings { symbol: "AAPL".to_string(), held: 0, requested: 1 }
    )]
    #[case::unknown_symbol(
        LedgerError::unknown_symbol("ZZZZ"),
        LedgerError::UnknownSymbol { symbol: "ZZZZ".to_string() }
    )]
    #[case::session_not_found(
        LedgerError::session_not_found("web-42"),
        LedgerError::SessionNotFound { session_id: "web-42".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
