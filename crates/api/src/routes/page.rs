//! The dashboard page.
//!
//! A single static document; tabs, charts and the grid are filled in by
//! calling the `/api/v1` routes.

use axum::{Router, response::Html, routing::get};

use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Creates the page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
