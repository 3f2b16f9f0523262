//! Grid error types.

use thiserror::Error;

/// Errors in a grid query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A filter clause that does not parse.
    #[error("Invalid filter clause {clause:?}: {reason}")]
    InvalidFilter {
        /// The clause text.
        clause: String,
        /// What is wrong.
        reason: &'static str,
    },

    /// A sort or filter column the table does not have.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
