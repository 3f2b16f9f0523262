//! Chart error types.

use thiserror::Error;

use crate::schema::Dataset;

/// Errors that can occur while building a figure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// No chart with this graph id.
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// The chart's source table is not loaded.
    #[error("Table not loaded: {0}")]
    MissingTable(Dataset),

    /// The source table lacks a column the chart plots.
    #[error("Column {column} not found in {table}")]
    MissingColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// A chart definition that cannot be drawn (e.g. a pie with two value columns).
    #[error("Invalid chart definition {id}: {reason}")]
    InvalidSpec {
        /// Graph id.
        id: &'static str,
        /// What is wrong.
        reason: &'static str,
    },
}
