//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over ledger operations from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! OperationReader implements the Iterator trait, yielding
//! Result<Operation, String> for each CSV row:
//!
//! ```no_run
//! use trading_ledger::io::reader::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Parsed operation: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row parsing errors are yielded as Err variants in the
//!   iterator, with line numbers for debugging
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; memory usage is constant in the file size.

use crate::io::csv_format::{convert_operation_row, OperationRow};
use crate::types::Operation;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over an operations CSV file
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl OperationReader {
    /// Create a new OperationReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The CSV
    /// reader trims whitespace from all fields and allows flexible field
    /// counts, since unused columns may be omitted per row.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(OperationReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<Operation, String>;

    /// Get the next operation from the CSV file
    ///
    /// Reads and deserializes the next row, converts it to an `Operation`,
    /// and prefixes any error with the row's line number (line 1 is the
    /// header).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OperationRow>();

        match deserializer.next()? {
            Ok(row) => {
                self.line_num += 1;
                Some(
                    convert_operation_row(row)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_opens_existing_file() {
        let file = create_temp_csv("op,symbol,quantity,amount\ndeposit,,,100.0\n");

        assert!(OperationReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_reader_fails_on_missing_file() {
        let result = OperationReader::new(Path::new("nonexistent.csv"));

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_reader_iterates_all_operation_kinds() {
        let file = create_temp_csv(
            "op,symbol,quantity,amount\n\
             deposit,,,1000.0\n\
             buy,AAPL,2,\n\
             sell,AAPL,1,\n\
             withdraw,,,50.0\n",
        );

        let reader = OperationReader::new(file.path()).unwrap();
        let operations: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(
            operations,
            vec![
                Operation::Deposit {
                    amount: Decimal::new(10000, 1)
                },
                Operation::Buy {
                    symbol: "AAPL".to_string(),
                    quantity: 2
                },
                Operation::Sell {
                    symbol: "AAPL".to_string(),
                    quantity: 1
                },
                Operation::Withdraw {
                    amount: Decimal::new(500, 1)
                },
            ]
        );
    }

    #[test]
    fn test_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(
            "op,symbol,quantity,amount\n\
             deposit,,,100.0\n\
             deposit,,,not-a-number\n\
             deposit,,,50.0\n",
        );

        let reader = OperationReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());

        let error = results[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3")); // Line 3 because of the header
        assert!(error.contains("Invalid amount"));
    }

    #[test]
    fn test_reader_continues_after_bad_rows() {
        let file = create_temp_csv(
            "op,symbol,quantity,amount\n\
             deposit,,,100.0\n\
             split,AAPL,2,\n\
             buy,AAPL,1,\n",
        );

        let reader = OperationReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let file = create_temp_csv("op,symbol,quantity,amount\n  buy  ,  AAPL  ,  2  ,\n");

        let reader = OperationReader::new(file.path()).unwrap();
        let operations: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(
            operations,
            vec![Operation::Buy {
                symbol: "AAPL".to_string(),
                quantity: 2
            }]
        );
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("op,symbol,quantity,amount\n");

        let reader = OperationReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_reader_handles_short_rows() {
        // Flexible column counts: trailing unused columns may be omitted
        let file = create_temp_csv("op,symbol,quantity,amount\nbuy,AAPL,2\n");

        let reader = OperationReader::new(file.path()).unwrap();
        let operations: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(
            operations,
            vec![Operation::Buy {
                symbol: "AAPL".to_string(),
                quantity: 2
            }]
        );
    }
}
