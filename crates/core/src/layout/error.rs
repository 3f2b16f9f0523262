//! Layout error types.

use thiserror::Error;

/// Errors raised while resolving tab identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A tab id that the page does not define.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// A sub-tab id that the receivables tab does not define.
    #[error("Unknown sub-tab: {0}")]
    UnknownSubTab(String),
}
