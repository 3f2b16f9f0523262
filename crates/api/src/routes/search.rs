//! Search box callback.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use palm_core::schema::Dataset;
use palm_core::search::{format_tokens, match_rows, tokenize};

use crate::AppState;

/// Request body for a search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query.
    pub query: String,
}

/// Search fragment.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Text shown under the search box.
    pub output: String,
    /// Query tokens.
    pub tokens: Vec<String>,
    /// Receivables rows containing every word of the query.
    pub matches: Vec<Map<String, Value>>,
}

async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let tokens = tokenize(&request.query);
    let matches = state
        .tables
        .get(Dataset::Receivables)
        .map(|table| table.records(&match_rows(table, &tokens)))
        .unwrap_or_default();

    Json(SearchResponse {
        output: format_tokens(&tokens),
        tokens,
        matches,
    })
}

/// Creates the search route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", post(search))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, body_json, post_json};

    #[tokio::test]
    async fn test_search_tokens_and_matches() {
        let body = r#"{"query": "Open invoices for Acme!"}"#;
        let response = post_json(app(), "/api/v1/search", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["output"],
            "Search tokens: ['open', 'invoices', 'for', 'acme', '!']"
        );
        assert_eq!(body["tokens"].as_array().unwrap().len(), 5);
        assert_eq!(body["matches"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_search_matches_receivables() {
        let response = post_json(app(), "/api/v1/search", r#"{"query": "acme open"}"#).await;
        let body = body_json(response).await;

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["customer_name"], "Acme Corp");
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let response = post_json(app(), "/api/v1/search", "{}").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
