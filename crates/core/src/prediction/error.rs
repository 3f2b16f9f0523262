//! Prediction error types.

use thiserror::Error;

/// Errors from parsing prediction input or evaluating the model.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// No parameters were given.
    #[error("No parameters given")]
    Empty,

    /// A comma-separated piece is not a number.
    #[error("Invalid number at position {position}: {value:?}")]
    InvalidNumber {
        /// 0-based position in the list.
        position: usize,
        /// The offending text.
        value: String,
    },

    /// Parameter count differs from the model's feature count.
    #[error("Model expects {expected} parameters, got {actual}")]
    ShapeMismatch {
        /// Feature count of the model.
        expected: usize,
        /// Parameters given.
        actual: usize,
    },

    /// Result does not fit a decimal.
    #[error("Prediction overflowed")]
    Overflow,

    /// Model artifact could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        /// Artifact path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Model artifact is not a valid linear model.
    #[error("Invalid model artifact {path}: {source}")]
    Artifact {
        /// Artifact path.
        path: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Model has no features.
    #[error("Model artifact {0} declares no coefficients")]
    NoCoefficients(String),
}

impl PredictionError {
    /// Returns true if the error is caused by the user's input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::InvalidNumber { .. } | Self::ShapeMismatch { .. } | Self::Overflow
        )
    }
}
