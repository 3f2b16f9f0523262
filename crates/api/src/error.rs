//! Mapping from domain errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use palm_core::chart::ChartError;
use palm_core::export::ExportError;
use palm_core::grid::GridError;
use palm_core::layout::LayoutError;
use palm_core::prediction::PredictionError;
use palm_shared::AppError;

/// Handler error: an [`AppError`] rendered as `{ "error", "message" }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            error!(error = %self.0, "Request failed");
            "An error occurred".to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LayoutError> for ApiError {
    fn from(err: LayoutError) -> Self {
        Self(AppError::NotFound(err.to_string()))
    }
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        Self(match err {
            ChartError::UnknownChart(_) => AppError::NotFound(err.to_string()),
            ChartError::MissingColumn { .. } => AppError::Schema(err.to_string()),
            ChartError::MissingTable(_) | ChartError::InvalidSpec { .. } => {
                AppError::Internal(err.to_string())
            }
        })
    }
}

impl From<GridError> for ApiError {
    fn from(err: GridError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self(if err.is_input_error() {
            AppError::Validation(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let response = ApiError(AppError::Validation("bad input".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "Validation error: bad input");
    }

    #[tokio::test]
    async fn test_server_error_hides_message() {
        let response = ApiError(AppError::Internal("secret detail".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An error occurred");
    }

    #[rstest]
    #[case(GridError::UnknownColumn("x".into()), 400)]
    #[case(GridError::InvalidFilter { clause: "x".into(), reason: "expected {column}" }, 400)]
    fn test_grid_errors_are_client_errors(#[case] err: GridError, #[case] status: u16) {
        assert_eq!(ApiError::from(err).0.status_code(), status);
    }

    #[test]
    fn test_prediction_error_mapping() {
        let input = ApiError::from(PredictionError::Empty);
        assert_eq!(input.0.error_code(), "VALIDATION_ERROR");

        let artifact = ApiError::from(PredictionError::NoCoefficients("model.json".into()));
        assert_eq!(artifact.0.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_layout_error_is_not_found() {
        let err = ApiError::from(LayoutError::UnknownTab("tab-x".into()));
        assert_eq!(err.0.status_code(), 404);
    }
}
