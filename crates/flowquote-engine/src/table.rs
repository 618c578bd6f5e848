//! Pricing table loading
//!
//! The table is read once at startup and treated as immutable afterwards.
//! Loading is explicit so deployments choose between failing loudly
//! ([`load`]) and degrading to an empty table ([`load_or_empty`]). With an
//! empty table the engine stays up and reports every node as unpriceable,
//! which routes through to manual review instead of crashing request
//! handling.

use flowquote_common::{PricingTable, Result, TableError};
use std::path::Path;
use tracing::{info, warn};

/// Load a pricing table from a JSON file, failing loudly
pub fn load(path: impl AsRef<Path>) -> Result<PricingTable> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| TableError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let table = PricingTable::from_json(&content).map_err(|e| TableError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    // Lint findings are logged, never fatal
    for finding in table.validate() {
        warn!(path = %path.display(), "Pricing table issue: {}", finding);
    }

    info!(
        path = %path.display(),
        node_types = table.node_types.len(),
        "Loaded pricing table"
    );

    Ok(table)
}

/// Load a pricing table, falling back to an empty table on any failure
///
/// The failure is logged once here; request paths never see it.
pub fn load_or_empty(path: impl AsRef<Path>) -> PricingTable {
    match load(path.as_ref()) {
        Ok(table) => table,
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "Failed to load pricing table, continuing with an empty one"
            );
            PricingTable::empty()
        }
    }
}
