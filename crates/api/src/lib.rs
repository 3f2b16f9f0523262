//! HTTP layer for the Palm dashboard.
//!
//! This crate provides:
//! - The dashboard page
//! - JSON callbacks under `/api/v1` for tabs, charts, the grid, prediction,
//!   search and the external data feed
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use palm_core::chart::FigureCache;
use palm_core::prediction::LinearModel;
use palm_core::store::LedgerSet;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ledger and synthetic tables, read-only after startup.
    pub tables: Arc<LedgerSet>,
    /// Built chart figures.
    pub figures: FigureCache,
    /// Prediction model.
    pub model: Arc<LinearModel>,
    /// Client for the external data feed.
    pub http: reqwest::Client,
    /// URL of the external data feed.
    pub external_api_url: Arc<str>,
}

impl AppState {
    /// Creates the state with a default HTTP client.
    #[must_use]
    pub fn new(
        tables: LedgerSet,
        figures: FigureCache,
        model: LinearModel,
        external_api_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            tables: Arc::new(tables),
            figures,
            model: Arc::new(model),
            http: reqwest::Client::new(),
            external_api_url: external_api_url.into(),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::page::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
