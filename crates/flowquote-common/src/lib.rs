//! # Flowquote Common
//!
//! Shared types and errors for the Flowquote pricing engine.
//!
//! ## Core Types
//!
//! - [`PricingTable`]: node-type price catalog loaded from JSON config
//! - [`ModifierRule`]/[`ModifierKind`]: price adjustment rules per node type
//! - [`ModifierValue`]: raw caller-supplied modifier values
//! - [`PriceCalculation`]: per-node outcome, priced or flagged for review
//! - [`WorkflowQuote`]: aggregated quote for a parsed workflow

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{FlowquoteError, Result, TableError};
pub use types::{
    modifier::{ModifierKind, ModifierRule, ModifierValue},
    pricing::{
        BreakdownLine, NodePrice, NodeTypePricing, PriceCalculation, PriceRules, PricingFailure,
        PricingTable, UnpricedNode,
    },
    workflow::{PriceListEntry, QuoteLineItem, ReviewFlag, WorkflowNode, WorkflowQuote},
};

/// Flowquote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Currency applied when a node type does not declare one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal places kept on final prices
pub const PRICE_SCALE: u32 = 2;
