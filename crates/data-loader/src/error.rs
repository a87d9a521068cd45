//! Error types for the data-loader crate.
//!
//! Every failure while loading, reading or writing a film table ends up here:
//! - structural problems (a required column is missing, a row is ragged)
//! - type problems (a numeric cell that doesn't parse)
//! - I/O and CSV failures, wrapped with `#[from]`

use thiserror::Error;

/// Errors that can occur while loading, accessing or writing a film table
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader or writer rejected the data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A cell that must be numeric held something else
    ///
    /// `row` is the 0-based position of the record in the table.
    #[error("Invalid value for {field} at row {row}: {value:?}")]
    InvalidValue {
        field: String,
        row: usize,
        value: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
