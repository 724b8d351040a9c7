//! Operation replay pipeline
//!
//! Orchestrates the complete batch pipeline: stream operations from a CSV
//! file, apply each to a single account, then write the selected report to
//! the output writer.
//!
//! # Error Handling
//!
//! Fatal errors (unopenable input, invalid opening deposit, report write
//! failures) abort the run and are returned to the caller. Individual
//! operation failures are recoverable: they are reported to stderr and
//! processing continues with the next row, leaving the account exactly as it
//! was before the failed operation. The account itself performs no logging;
//! turning errors into messages is this layer's job.

use crate::cli::ReportKind;
use crate::core::Account;
use crate::io::csv_format::{write_holdings_csv, write_statement_csv, write_transactions_csv};
use crate::io::reader::OperationReader;
use crate::pricing::PriceOracle;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

/// Replay an operations CSV through one account and write a report
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV file of operations
/// * `opening_deposit` - Non-negative funds the account starts with
/// * `oracle` - Pricing capability injected into the account
/// * `report` - Which report to write once all operations have been applied
/// * `output` - Writer receiving the report CSV
///
/// # Errors
///
/// Returns `Err(String)` if:
/// - The opening deposit is negative
/// - The input file cannot be opened
/// - The report cannot be produced or written
///
/// Individual operation and row-parsing errors are logged to stderr and do
/// not cause this function to return an error.
pub fn replay(
    input_path: &Path,
    opening_deposit: Decimal,
    oracle: Box<dyn PriceOracle>,
    report: ReportKind,
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut account =
        Account::new(oracle, opening_deposit).map_err(|e| format!("Cannot open account: {}", e))?;

    let reader = OperationReader::new(input_path)?;

    for result in reader {
        match result {
            Ok(operation) => {
                // A rejected operation leaves the account untouched
                if let Err(e) = account.apply(operation) {
                    eprintln!("Operation error: {}", e);
                }
            }
            Err(e) => {
                eprintln!("CSV parsing error: {}", e);
            }
        }
    }

    match report {
        ReportKind::Statement => write_statement_csv(&account, output),
        ReportKind::Holdings => write_holdings_csv(&account, output),
        ReportKind::Transactions => write_transactions_csv(account.transaction_history(), output),
    }
}
