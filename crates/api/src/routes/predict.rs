//! Prediction callback.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tracing::debug;

use palm_core::prediction::{format_prediction, parse_parameters};

use crate::AppState;
use crate::error::ApiResult;

/// Request body for a prediction.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Comma-separated numeric parameters, e.g. `"1.5, 2"`.
    pub parameters: String,
}

/// Prediction fragment.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Text shown under the input.
    pub output: String,
    /// The predicted value as a decimal string.
    pub value: String,
}

async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let parameters = parse_parameters(&request.parameters)?;
    let value = state.model.predict(&parameters)?;
    debug!(features = parameters.len(), %value, "Prediction made");

    Ok(Json(PredictResponse {
        output: format_prediction(value),
        value: value.normalize().to_string(),
    }))
}

/// Creates the prediction route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}
