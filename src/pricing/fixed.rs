//! Fixed-table price oracle
//!
//! The canonical reference implementation of [`PriceOracle`]: an in-memory
//! lookup table with no live data feed. Prices never move within a process
//! lifetime.

use crate::pricing::PriceOracle;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Price oracle backed by a fixed symbol-to-price table
///
/// The default table carries the reference prices used across the system:
/// AAPL at 150.00, TSLA at 250.00, GOOGL at 2800.00. Custom tables can be
/// supplied with [`FixedPriceOracle::with_prices`].
#[derive(Debug, Clone)]
pub struct FixedPriceOracle {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceOracle {
    /// Create an oracle with the canonical reference price table
    pub fn new() -> Self {
        let prices = HashMap::from([
            ("AAPL".to_string(), Decimal::new(15000, 2)),
            ("TSLA".to_string(), Decimal::new(25000, 2)),
            ("GOOGL".to_string(), Decimal::new(280000, 2)),
        ]);
        FixedPriceOracle { prices }
    }

    /// Create an oracle with a custom price table
    ///
    /// # Arguments
    ///
    /// * `prices` - Map of ticker symbol to unit price
    pub fn with_prices(prices: HashMap<String, Decimal>) -> Self {
        FixedPriceOracle { prices }
    }
}

impl Default for FixedPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracle for FixedPriceOracle {
    fn price(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::aapl("AAPL", Decimal::new(15000, 2))]
    #[case::tsla("TSLA", Decimal::new(25000, 2))]
    #[case::googl("GOOGL", Decimal::new(280000, 2))]
    fn test_canonical_table(#[case] symbol: &str, #[case] expected: Decimal) {
        let oracle = FixedPriceOracle::new();
        assert_eq!(oracle.price(symbol), Some(expected));
    }

    #[rstest]
    #[case::unknown("ZZZZ")]
    #[case::lowercase("aapl")]
    #[case::empty("")]
    fn test_unrecognized_symbols_have_no_price(#[case] symbol: &str) {
        let oracle = FixedPriceOracle::new();
        assert_eq!(oracle.price(symbol), None);
    }

    #[test]
    fn test_custom_table_overrides_canonical() {
        let oracle = FixedPriceOracle::with_prices(HashMap::from([(
            "NVDA".to_string(),
            Decimal::new(90000, 2),
        )]));

        assert_eq!(oracle.price("NVDA"), Some(Decimal::new(90000, 2)));
        // Canonical symbols are absent from a custom table
        assert_eq!(oracle.price("AAPL"), None);
    }

    #[test]
    fn test_quotes_are_stable() {
        let oracle = FixedPriceOracle::new();
        let first = oracle.price("AAPL");
        let second = oracle.price("AAPL");
        assert_eq!(first, second);
    }

    #[test]
    fn test_oracle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixedPriceOracle>();
    }
}
