//! Pricing module
//!
//! Defines the price oracle capability consumed by the account ledger and
//! the canonical fixed-table implementation.
//!
//! The oracle is an injectable seam: the ledger never depends on a specific
//! pricing source, so tests and alternative deployments can supply their own
//! tables without touching account logic.

pub mod fixed;

pub use fixed::FixedPriceOracle;

use rust_decimal::Decimal;

/// Capability that maps a ticker symbol to its current unit price
///
/// Implementations must be pure and deterministic for the lifetime of the
/// process: the same symbol always quotes the same price, and quoting has no
/// side effects. That makes an oracle safely callable without
/// synchronization.
///
/// Returns `None` for a symbol the oracle does not recognize; the ledger
/// turns that into [`crate::types::LedgerError::UnknownSymbol`]. An oracle
/// must never quote an unknown symbol at zero.
pub trait PriceOracle: Send + Sync {
    /// Current unit price for the symbol, or `None` if unrecognized
    fn price(&self, symbol: &str) -> Option<Decimal>;
}
