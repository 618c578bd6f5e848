//! Error types for Flowquote
//!
//! Provides a unified error type for engine setup plus the failure codes
//! reported inside calculation results. Price calculations themselves never
//! return errors; unpriceable input is reported through
//! [`PricingFailure`](crate::types::pricing::PricingFailure).

use thiserror::Error;

/// Result type alias using FlowquoteError
pub type Result<T> = std::result::Result<T, FlowquoteError>;

/// Unified error type for Flowquote operations
#[derive(Debug, Error)]
pub enum FlowquoteError {
    // Pricing table load errors
    #[error("Pricing table error: {0}")]
    Table(#[from] TableError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Pricing table load errors
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read pricing table {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse pricing table {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl TableError {
    /// Path of the table file that failed to load
    pub fn path(&self) -> &str {
        match self {
            TableError::Read { path, .. } => path,
            TableError::Parse { path, .. } => path,
        }
    }
}
