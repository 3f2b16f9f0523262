//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

/// Dashboard behaviour: model artifact, external feed, mock data.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Path of the prediction model artifact, relative to the working directory.
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// URL hit by the "Fetch External Data" button.
    #[serde(default = "default_external_api_url")]
    pub external_api_url: String,
    /// Seed for the synthetic case/CRM/report tables. Random when unset.
    #[serde(default)]
    pub synthetic_seed: Option<u64>,
    /// Maximum number of built chart figures kept in memory.
    #[serde(default = "default_figure_cache_capacity")]
    pub figure_cache_capacity: u64,
}

fn default_model_path() -> String {
    "model.json".to_string()
}

fn default_external_api_url() -> String {
    "https://api.example.com/data".to_string()
}

fn default_figure_cache_capacity() -> u64 {
    64
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            external_api_url: default_external_api_url(),
            synthetic_seed: None,
            figure_cache_capacity: default_figure_cache_capacity(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PALM").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
