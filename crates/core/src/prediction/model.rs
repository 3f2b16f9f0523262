//! Linear regression model artifact.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::PredictionError;

/// A fitted linear model: `intercept + Σ coefficient_i * x_i`.
///
/// Stored as JSON with decimal strings, e.g.
/// `{"intercept": "12.5", "coefficients": ["0.8", "-1.25"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Constant term.
    pub intercept: Decimal,
    /// One weight per input feature.
    pub coefficients: Vec<Decimal>,
}

impl LinearModel {
    /// Loads a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| PredictionError::Io {
            path: shown.clone(),
            source,
        })?;
        let model = Self::parse(&bytes, &shown)?;
        info!(path = %shown, features = model.features(), "Prediction model loaded");
        Ok(model)
    }

    /// Parses a model artifact held in memory.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PredictionError> {
        Self::parse(bytes, "<memory>")
    }

    fn parse(bytes: &[u8], path: &str) -> Result<Self, PredictionError> {
        let model: Self =
            serde_json::from_slice(bytes).map_err(|source| PredictionError::Artifact {
                path: path.to_string(),
                source,
            })?;
        if model.coefficients.is_empty() {
            return Err(PredictionError::NoCoefficients(path.to_string()));
        }
        Ok(model)
    }

    /// Number of input features.
    #[must_use]
    pub fn features(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the model for one row of parameters.
    pub fn predict(&self, parameters: &[Decimal]) -> Result<Decimal, PredictionError> {
        if parameters.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: parameters.len(),
            });
        }

        self.coefficients
            .iter()
            .zip(parameters)
            .try_fold(self.intercept, |acc, (w, x)| {
                w.checked_mul(*x).and_then(|term| acc.checked_add(term))
            })
            .ok_or(PredictionError::Overflow)
    }
}
