use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay trading account operations from a CSV file
#[derive(Parser, Debug)]
#[command(name = "trading-ledger")]
#[command(about = "Replay trading account operations and report the result", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing ledger operations
    #[arg(value_name = "INPUT", help = "Path to the input CSV file of operations")]
    pub input_file: PathBuf,

    /// Funds the account starts with (also the gain/loss baseline)
    #[arg(
        long = "opening-deposit",
        value_name = "AMOUNT",
        default_value = "0",
        help = "Non-negative opening deposit (default: 0)"
    )]
    pub opening_deposit: Decimal,

    /// Which report to print after replaying all operations
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "statement",
        help = "Report to print: 'statement', 'holdings', or 'transactions'"
    )]
    pub report: ReportKind,
}

/// Available reports over the final account state
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Cash balance, portfolio value, and gain/loss summary
    Statement,
    /// Current holdings with market values
    Holdings,
    /// The full transaction log
    Transactions,
}
