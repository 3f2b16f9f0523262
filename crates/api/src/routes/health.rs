//! Health check endpoints.

use std::collections::HashMap;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Rows per loaded table.
    pub tables: Vec<TableHealth>,
}

/// Row count and schema state of one table.
#[derive(Serialize)]
pub struct TableHealth {
    /// Table name.
    pub table: &'static str,
    /// Number of rows.
    pub rows: usize,
    /// Why the table does not match its declared schema, if it doesn't.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_error: Option<String>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let checks: HashMap<_, _> = state.tables.schema_report().into_iter().collect();
    let tables = state
        .tables
        .row_counts()
        .into_iter()
        .map(|(dataset, rows)| TableHealth {
            table: dataset.table_name(),
            rows,
            schema_error: checks
                .get(&dataset)
                .and_then(|check| check.as_ref().err())
                .map(ToString::to_string),
        })
        .collect();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tables,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, body_json, get};

    #[tokio::test]
    async fn test_health_lists_every_table() {
        let response = get(app(), "/api/v1/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        let tables = body["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 17);
        let cases = tables.iter().find(|t| t["table"] == "cases").unwrap();
        assert_eq!(cases["rows"], 100);
        assert!(tables.iter().all(|t| t.get("schema_error").is_none()));
    }
}
