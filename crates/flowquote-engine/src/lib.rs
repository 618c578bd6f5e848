//! # Flowquote Engine
//!
//! Node pricing for parsed automation workflows.
//!
//! ## Pricing Formula
//!
//! ```text
//! price = base + Σ modifier costs      (in rule declaration order)
//! price = clamp(price, min, max)       (each clamp adds a breakdown line)
//! final = round2(max(price, 0))
//! ```
//!
//! Modifier kinds: `per_unit`, `per_mb`, `per_kb` (quantity × rate),
//! `boolean` (flat surcharge when truthy), `multiplier` (scales the running
//! total). Unknown kinds apply as zero-cost no-ops.
//!
//! The pricing table is loaded once ([`table::load`] or
//! [`table::load_or_empty`]) and the engine only reads it afterwards, so a
//! single [`PricingEngine`] can serve any number of concurrent callers.

pub mod config;
pub mod engine;
pub mod quote;
pub mod table;

pub use config::EngineConfig;
pub use engine::PricingEngine;

/// Pricing table path used when the environment does not set one
pub const DEFAULT_TABLE_PATH: &str = "config/node_pricing.json";
