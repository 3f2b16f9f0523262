//! Database layer for the ledger tables.
//!
//! This crate provides:
//! - Connection setup from configuration
//! - The ledger repository that loads and seeds tables verbatim
//! - Database migrations

pub mod ledger;
pub mod migration;

pub use ledger::{LedgerRepository, LoadError};

use std::time::Duration;

use palm_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    Database::connect(options).await
}
