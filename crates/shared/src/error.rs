//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown tab, chart, or column.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed user input (prediction parameters, filter query).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A loaded table does not have the shape a chart or grid needs.
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Schema(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Schema(_) => "SCHEMA_MISMATCH",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the message is safe to show to the caller verbatim.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
