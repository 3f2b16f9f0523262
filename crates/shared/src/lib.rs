//! Shared types, errors, and configuration for the Palm dashboard.
//!
//! This crate provides common types used across all other crates:
//! - Pagination types for the data grid
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DashboardConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, AppResult};
