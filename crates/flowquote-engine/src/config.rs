//! Engine configuration

use flowquote_common::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pricing engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the pricing table JSON
    pub table_path: PathBuf,
    /// Fail startup on a bad table instead of degrading to an empty one
    pub strict_load: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(crate::DEFAULT_TABLE_PATH),
            strict_load: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(path) = std::env::var("FLOWQUOTE_PRICING_TABLE") {
            cfg.table_path = PathBuf::from(path);
        }
        if let Ok(val) = std::env::var("FLOWQUOTE_STRICT_LOAD") {
            cfg.strict_load = matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(cfg)
    }
}
