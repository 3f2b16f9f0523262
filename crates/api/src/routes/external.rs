//! External data feed callback.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::AppState;

/// Shown whenever the feed does not answer 200 with JSON.
pub const FETCH_FAILED: &str = "Failed to fetch data from the API.";

/// External data fragment.
#[derive(Debug, Serialize)]
pub struct ExternalResponse {
    /// Text shown under the fetch button.
    pub output: String,
}

/// Fetches the feed once; no retry.
pub async fn fetch_external_data(client: &reqwest::Client, url: &str) -> String {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(url, error = %e, "External API request failed");
            return FETCH_FAILED.to_string();
        }
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        warn!(url, %status, "External API returned an error status");
        return FETCH_FAILED.to_string();
    }

    match response.json::<Value>().await {
        Ok(data) => {
            info!(url, "External data fetched");
            format!("Fetched data: {data}")
        }
        Err(e) => {
            warn!(url, error = %e, "External API returned an unreadable body");
            FETCH_FAILED.to_string()
        }
    }
}

async fn fetch(State(state): State<AppState>) -> (StatusCode, Json<ExternalResponse>) {
    let output = fetch_external_data(&state.http, &state.external_api_url).await;
    (StatusCode::OK, Json(ExternalResponse { output }))
}

/// Creates the external data route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/external", post(fetch))
}
