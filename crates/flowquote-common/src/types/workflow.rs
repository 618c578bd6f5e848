//! Workflow-level quote types
//!
//! A parsed workflow arrives as an ordered list of typed nodes; the engine
//! prices each node and aggregates the results into a [`WorkflowQuote`] with
//! review flags for anything it could not price automatically.

use crate::types::modifier::ModifierValue;
use crate::types::pricing::PriceCalculation;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single node from a parsed workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Node id from the workflow definition
    pub id: String,
    /// Display name from the workflow definition
    pub name: String,
    /// Node type identifier used for the pricing lookup
    #[serde(rename = "type")]
    pub node_type: String,
    /// Raw modifier values keyed by modifier name
    #[serde(default)]
    pub modifiers: HashMap<String, ModifierValue>,
}

impl WorkflowNode {
    /// Create a node with no modifiers
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        node_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: node_type.into(),
            modifiers: HashMap::new(),
        }
    }

    /// Attach a modifier value
    pub fn with_modifier(mut self, name: impl Into<String>, value: impl Into<ModifierValue>) -> Self {
        self.modifiers.insert(name.into(), value.into());
        self
    }
}

/// Per-node entry in a workflow quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    /// Node id from the workflow definition
    pub node_id: String,
    /// Display name from the workflow definition
    pub node_name: String,
    /// Node type identifier
    pub node_type: String,
    /// Calculation outcome for this node
    pub pricing: PriceCalculation,
}

/// A node that could not be priced automatically
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFlag {
    /// Node id from the workflow definition
    pub node_id: String,
    /// Node type that failed to price
    pub node_type: String,
    /// Why the node needs manual review
    pub reason: String,
}

/// A complete priced workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowQuote {
    /// Quote identifier for persistence and export
    pub quote_id: Uuid,

    /// Currency of the subtotal, taken from the first priced node
    pub currency: String,

    /// Sum of all successfully priced nodes, rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// How many nodes priced automatically
    pub priced_node_count: usize,

    /// One entry per workflow node, in workflow order
    pub line_items: Vec<QuoteLineItem>,

    /// Nodes that need manual pricing
    pub review_flags: Vec<ReviewFlag>,

    /// True when any node needs manual pricing
    pub requires_review: bool,

    /// When the quote was generated
    pub generated_at: DateTime<Utc>,
}

/// Catalog entry for the price-list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListEntry {
    /// Node type identifier
    pub node_type: String,
    /// Human-readable display name
    pub label: String,
    /// Starting price before modifiers
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    /// Currency of the base price
    pub currency: String,
}
