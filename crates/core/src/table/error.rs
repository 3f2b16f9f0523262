//! Table error types.

use thiserror::Error;

/// Errors raised while building or reshaping a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A column name that the table does not have.
    #[error("Table {table} has no column {column}")]
    UnknownColumn {
        /// Table name.
        table: String,
        /// Requested column.
        column: String,
    },

    /// A row whose width differs from the header.
    #[error("Row {row} of {table} has {actual} fields, expected {expected}")]
    RowArity {
        /// Table name.
        table: String,
        /// Zero-based row index.
        row: usize,
        /// Header width.
        expected: usize,
        /// Row width.
        actual: usize,
    },

    /// A database record that is not a JSON object.
    #[error("Row {row} of {table} is not a record")]
    NotARecord {
        /// Table name.
        table: String,
        /// Zero-based row index.
        row: usize,
    },

    /// A value in a date column that cannot be read as a date.
    #[error("Cannot read {value:?} in {table}.{column} (row {row}) as a date")]
    UnparsableDate {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// Offending value.
        value: String,
    },
}
