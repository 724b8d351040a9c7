//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, report serialization)
//! - `reader` - Streaming CSV reader with iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_operation_row, write_holdings_csv, write_statement_csv, write_transactions_csv,
    OperationRow,
};
pub use reader::OperationReader;
