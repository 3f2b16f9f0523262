//! Palm dashboard server
//!
//! Loads every table once, then serves the dashboard page and its callbacks.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palm_api::{AppState, create_router};
use palm_core::chart::FigureCache;
use palm_core::prediction::LinearModel;
use palm_core::store::LedgerSet;
use palm_core::synthetic::SyntheticTables;
use palm_db::{LedgerRepository, connect};
use palm_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palm=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database and load the ledgers
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");
    let ledgers = LedgerRepository::new(db)
        .load_ledgers()
        .await
        .context("Failed to load ledger tables")?;

    // Mock tables
    let synthetic = SyntheticTables::generate(config.dashboard.synthetic_seed)
        .context("Failed to generate mock tables")?;
    let tables = LedgerSet::new(ledgers, synthetic)?;
    for (dataset, rows) in tables.row_counts() {
        info!(table = %dataset, rows, "Table ready");
    }

    // Prediction model
    let model = LinearModel::load(&config.dashboard.model_path)
        .with_context(|| format!("Failed to load model from {}", config.dashboard.model_path))?;

    // Create application state
    let state = AppState::new(
        tables,
        FigureCache::with_capacity(config.dashboard.figure_cache_capacity),
        model,
        config.dashboard.external_api_url.as_str(),
    );
    info!(url = %state.external_api_url, "External data feed configured");

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
