//! Trading Ledger CLI
//!
//! Command-line interface for replaying trading account operations from CSV
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > statement.csv
//! cargo run -- --opening-deposit 1000 operations.csv > statement.csv
//! cargo run -- --opening-deposit 1000 --report holdings operations.csv
//! cargo run -- --report transactions operations.csv > log.csv
//! ```
//!
//! The program replays the operation records from the input CSV file through
//! a single account priced by the built-in fixed oracle, then writes the
//! selected report to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (missing arguments, file not found, invalid opening
//!   deposit, etc.)

use std::process;
use trading_ledger::cli;
use trading_ledger::pricing::FixedPriceOracle;
use trading_ledger::replay;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The reference fixed price table backs the CLI; the library accepts
    // any oracle implementation
    let oracle = Box::new(FixedPriceOracle::new());

    // Replay the operations and write the selected report to stdout
    let mut output = std::io::stdout();
    if let Err(e) = replay::replay(
        &args.input_file,
        args.opening_deposit,
        oracle,
        args.report,
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
