//! CSV format handling for operation input and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - OperationRow structure for deserialization
//! - Conversion from CSV rows to parsed operations
//! - Report serialization (statement, holdings, transactions)
//!
//! All functions are pure (no I/O beyond the provided writer) for easy
//! testing.

use crate::core::Account;
use crate::types::{Operation, Quantity, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV row structure for deserialization
///
/// Matches the input CSV format with columns: op, symbol, quantity, amount.
/// Symbol and quantity apply to buy/sell rows; amount applies to
/// deposit/withdraw rows. Unused columns are left empty.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationRow {
    pub op: String,
    pub symbol: Option<String>,
    pub quantity: Option<String>,
    pub amount: Option<String>,
}

/// Convert an OperationRow to a parsed Operation
///
/// This function:
/// - Parses the operation name (case-insensitive)
/// - Requires and parses the amount for deposit/withdraw rows
/// - Requires the symbol and parses the quantity for buy/sell rows
///
/// Syntax errors are reported here; business rules (positive amounts,
/// sufficient funds, known symbols) are validated by the ledger itself.
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
///
/// # Returns
///
/// Result containing either:
/// - Ok(Operation) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_operation_row(row: OperationRow) -> Result<Operation, String> {
    match row.op.to_lowercase().as_str() {
        "deposit" => Ok(Operation::Deposit {
            amount: parse_amount(row.amount, "deposit")?,
        }),
        "withdraw" => Ok(Operation::Withdraw {
            amount: parse_amount(row.amount, "withdraw")?,
        }),
        "buy" => Ok(Operation::Buy {
            symbol: parse_symbol(row.symbol, "buy")?,
            quantity: parse_quantity(row.quantity, "buy")?,
        }),
        "sell" => Ok(Operation::Sell {
            symbol: parse_symbol(row.symbol, "sell")?,
            quantity: parse_quantity(row.quantity, "sell")?,
        }),
        other => Err(format!("Invalid operation '{}'", other)),
    }
}

fn parse_amount(field: Option<String>, op: &str) -> Result<Decimal, String> {
    match field {
        Some(raw) if !raw.trim().is_empty() => Decimal::from_str(raw.trim())
            .map_err(|_| format!("Invalid amount '{}' for {} operation", raw, op)),
        _ => Err(format!("{} operation requires an amount", op)),
    }
}

fn parse_symbol(field: Option<String>, op: &str) -> Result<String, String> {
    match field {
        Some(raw) if !raw.trim().is_empty() => Ok(raw.trim().to_string()),
        _ => Err(format!("{} operation requires a symbol", op)),
    }
}

fn parse_quantity(field: Option<String>, op: &str) -> Result<Quantity, String> {
    match field {
        Some(raw) if !raw.trim().is_empty() => Quantity::from_str(raw.trim())
            .map_err(|_| format!("Invalid quantity '{}' for {} operation", raw, op)),
        _ => Err(format!("{} operation requires a quantity", op)),
    }
}

/// Write the account statement to CSV format
///
/// One summary row with columns: cash_balance, portfolio_value,
/// gain_or_loss, at 2-decimal display precision.
///
/// # Arguments
///
/// * `account` - The account to summarize
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if valuation or a write failed
pub fn write_statement_csv(account: &Account, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let portfolio_value = account
        .portfolio_value()
        .map_err(|e| format!("Failed to value portfolio: {}", e))?;
    let gain_or_loss = account
        .gain_or_loss()
        .map_err(|e| format!("Failed to compute gain/loss: {}", e))?;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["cash_balance", "portfolio_value", "gain_or_loss"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record(&[
            format!("{:.2}", account.cash_balance()),
            format!("{:.2}", portfolio_value),
            format!("{:.2}", gain_or_loss),
        ])
        .map_err(|e| format!("Failed to write statement record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write current holdings to CSV format
///
/// Writes holdings with columns: symbol, quantity, unit_price, market_value,
/// sorted by symbol for deterministic output.
///
/// # Arguments
///
/// * `account` - The account whose holdings to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if pricing or a write failed
pub fn write_holdings_csv(account: &Account, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["symbol", "quantity", "unit_price", "market_value"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort holdings by symbol for deterministic output
    let mut holdings: Vec<(String, Quantity)> = account.holdings_snapshot().into_iter().collect();
    holdings.sort_by(|a, b| a.0.cmp(&b.0));

    for (symbol, quantity) in holdings {
        let unit_price = account
            .quote(&symbol)
            .map_err(|e| format!("Failed to price holding: {}", e))?;
        let market_value = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| format!("Market value overflow for {}", symbol))?;

        writer
            .write_record(&[
                symbol,
                quantity.to_string(),
                format!("{:.2}", unit_price),
                format!("{:.2}", market_value),
            ])
            .map_err(|e| format!("Failed to write holding record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write the transaction log to CSV format
///
/// Writes transactions in log order with columns: timestamp, kind, symbol,
/// quantity, unit_price, amount. Timestamps are RFC 3339. The amount column
/// carries the cash delta of the entry: the deposited/withdrawn amount, or
/// the total cost/proceeds of a trade. Columns that do not apply to a kind
/// are left empty.
///
/// # Arguments
///
/// * `transactions` - The transaction log, in chronological order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["timestamp", "kind", "symbol", "quantity", "unit_price", "amount"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transaction in transactions {
        let timestamp = transaction.timestamp.to_rfc3339();
        let kind = transaction.kind.label().to_string();

        let record = match &transaction.kind {
            TransactionKind::Deposit { amount } | TransactionKind::Withdraw { amount } => [
                timestamp,
                kind,
                String::new(),
                String::new(),
                String::new(),
                format!("{:.2}", amount),
            ],
            TransactionKind::Buy {
                symbol,
                quantity,
                unit_price,
            }
            | TransactionKind::Sell {
                symbol,
                quantity,
                unit_price,
            } => {
                let total = unit_price
                    .checked_mul(Decimal::from(*quantity))
                    .ok_or_else(|| format!("Amount overflow for {}", symbol))?;
                [
                    timestamp,
                    kind,
                    symbol.clone(),
                    quantity.to_string(),
                    format!("{:.2}", unit_price),
                    format!("{:.2}", total),
                ]
            }
        };

        writer
            .write_record(&record)
            .map_err(|e| format!("Failed to write transaction record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
