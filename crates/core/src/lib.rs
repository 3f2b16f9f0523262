//! Core dashboard logic for Palm.
//!
//! This crate contains pure logic with ZERO web or database dependencies.
//! Tables arrive already loaded; everything here is computed from them.
//!
//! # Modules
//!
//! - `table` - Loaded tables and typed cells
//! - `schema` - Ledger catalogue and declared column schemas
//! - `synthetic` - Mock case, CRM and report tables
//! - `store` - The full set of tables the dashboard reads
//! - `chart` - Chart catalogue and Plotly figure building
//! - `layout` - Tabs, sub-tabs and the static page tree
//! - `grid` - Receivables grid sort and filter
//! - `export` - CSV download
//! - `prediction` - Linear model over user parameters
//! - `search` - Search box tokenization

pub mod chart;
pub mod export;
pub mod grid;
pub mod layout;
pub mod prediction;
pub mod sample;
pub mod schema;
pub mod search;
pub mod store;
pub mod synthetic;
pub mod table;
