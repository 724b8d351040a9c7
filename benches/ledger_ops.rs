//! Benchmark suite for ledger operations and the replay pipeline
//!
//! These benchmarks measure the hot paths of the account ledger using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Write;
use trading_ledger::cli::ReportKind;
use trading_ledger::pricing::FixedPriceOracle;
use trading_ledger::replay::replay;
use trading_ledger::Account;

fn main() {
    divan::main();
}

/// Benchmark alternating deposits and withdrawals (1,000 operations)
#[divan::bench]
fn deposit_withdraw_cycle() {
    let mut account =
        Account::new(Box::new(FixedPriceOracle::new()), Decimal::new(1_000_000, 0)).unwrap();

    for _ in 0..500 {
        account.deposit(Decimal::new(125, 0)).unwrap();
        account.withdraw(Decimal::new(125, 0)).unwrap();
    }
}

/// Benchmark buy/sell round trips against the canonical price table (200 operations)
#[divan::bench]
fn buy_sell_cycle() {
    let mut account =
        Account::new(Box::new(FixedPriceOracle::new()), Decimal::new(10_000, 0)).unwrap();

    for _ in 0..100 {
        account.buy("AAPL", 1).unwrap();
        account.sell("AAPL", 1).unwrap();
    }
}

/// Benchmark portfolio valuation over a wide synthetic price table (100 holdings)
#[divan::bench]
fn portfolio_value_wide() {
    let prices: HashMap<String, Decimal> = (0..100)
        .map(|i| (format!("SYM{:03}", i), Decimal::new(100 + i, 0)))
        .collect();
    let symbols: Vec<String> = prices.keys().cloned().collect();

    let mut account = Account::new(
        Box::new(FixedPriceOracle::with_prices(prices)),
        Decimal::new(100_000, 0),
    )
    .unwrap();
    for symbol in &symbols {
        account.buy(symbol, 1).unwrap();
    }

    for _ in 0..100 {
        account.portfolio_value().unwrap();
    }
}

/// Benchmark the full replay pipeline over a generated operations CSV (300 rows)
#[divan::bench]
fn replay_statement_pipeline() {
    let mut input = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(input, "op,symbol,quantity,amount").unwrap();
    for _ in 0..100 {
        writeln!(input, "deposit,,,500.0").unwrap();
        writeln!(input, "buy,AAPL,2,").unwrap();
        writeln!(input, "sell,AAPL,2,").unwrap();
    }
    input.flush().unwrap();

    let mut output = Vec::new();
    replay(
        input.path(),
        Decimal::new(1_000, 0),
        Box::new(FixedPriceOracle::new()),
        ReportKind::Statement,
        &mut output,
    )
    .expect("Replay failed");
}
