//! Static description of the page.

use axum::{Json, Router, extract::State, routing::get};

use palm_core::layout::PageLayout;
use palm_core::schema::Dataset;

use crate::AppState;

async fn get_layout(State(state): State<AppState>) -> Json<PageLayout> {
    let columns = state
        .tables
        .get(Dataset::Receivables)
        .map(|table| table.columns().to_vec())
        .unwrap_or_default();
    Json(PageLayout::describe(&columns))
}

/// Creates the layout route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/layout", get(get_layout))
}
