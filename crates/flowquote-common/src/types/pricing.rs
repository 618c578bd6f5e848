//! Pricing table and price-calculation result types
//!
//! The table side mirrors the JSON config document:
//!
//! ```text
//! node_types.<type> -> { label, base_price, modifiers[], price_rules }
//! global_modifiers  -> raw definitions passed through to calling code
//! ```
//!
//! The result side is what route handlers serialize back to clients: a
//! [`PriceCalculation`] is either a [`NodePrice`] with a line-itemized
//! breakdown or an [`UnpricedNode`] flagged for manual review.

use crate::types::modifier::{ModifierKind, ModifierRule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Min/max clamp bounds and currency tag for a node type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRules {
    /// Lower bound, applied after all modifiers
    pub min: Option<Decimal>,
    /// Upper bound, applied after the min bound
    pub max: Option<Decimal>,
    /// ISO currency code; falls back to [`DEFAULT_CURRENCY`](crate::DEFAULT_CURRENCY)
    pub currency: Option<String>,
}

/// Pricing rules for a single node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypePricing {
    /// Human-readable display name
    pub label: String,
    /// Starting price before modifiers
    pub base_price: Decimal,
    /// Applied in declaration order; order shapes the breakdown and the result
    #[serde(default)]
    pub modifiers: Vec<ModifierRule>,
    /// Clamp bounds, all optional
    #[serde(default)]
    pub price_rules: PriceRules,
}

/// Node-type price catalog, loaded once at startup and immutable afterwards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingTable {
    /// Pricing rules keyed by node type identifier
    #[serde(default)]
    pub node_types: BTreeMap<String, NodeTypePricing>,
    /// Modifier definitions shared across node types, consumed by calling code
    #[serde(default)]
    pub global_modifiers: BTreeMap<String, serde_json::Value>,
}

impl PricingTable {
    /// A table with no node types: every lookup misses and every
    /// calculation reports `NODE_TYPE_NOT_FOUND`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON document
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the table has no node types configured
    pub fn is_empty(&self) -> bool {
        self.node_types.is_empty()
    }

    /// Non-fatal lint pass over the table
    ///
    /// Findings never reject a table; loaders log them and keep going.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        for (node_type, pricing) in &self.node_types {
            if pricing.base_price < Decimal::ZERO {
                findings.push(format!("{}: base_price is negative", node_type));
            }

            if let (Some(min), Some(max)) = (pricing.price_rules.min, pricing.price_rules.max) {
                if min > max {
                    findings.push(format!(
                        "{}: price_rules.min {} exceeds max {}",
                        node_type, min, max
                    ));
                }
            }

            for rule in &pricing.modifiers {
                if !rule.kind.is_known() {
                    findings.push(format!(
                        "{}: modifier '{}' has unrecognized type '{}'",
                        node_type,
                        rule.name,
                        rule.kind.as_str()
                    ));
                }
                if rule.kind == ModifierKind::Multiplier && rule.price_per_unit <= Decimal::ZERO {
                    findings.push(format!(
                        "{}: multiplier '{}' has non-positive factor {}",
                        node_type, rule.name, rule.price_per_unit
                    ));
                }
            }
        }

        findings
    }
}

/// One line item of a price breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Human-readable description of the charge
    pub description: String,
    /// Charge amount; negative for discounts and max-clamp adjustments
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl BreakdownLine {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Machine-readable failure codes reported inside calculation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingFailure {
    /// The node type has no entry in the pricing table
    NodeTypeNotFound,
}

/// Successful price calculation for a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePrice {
    /// Always true; kept in the payload for callers that branch on it
    pub success: bool,

    /// The node type that was priced
    pub node_type: String,

    /// Starting price before modifiers
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,

    /// Final price, floored at zero and rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,

    /// Base line, one line per applied modifier, plus clamp adjustments
    pub breakdown: Vec<BreakdownLine>,

    /// Currency of all amounts in this result
    pub currency: String,
}

/// Failed price calculation; the node needs manual pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnpricedNode {
    /// Always false
    pub success: bool,
    /// Failure code
    pub error: PricingFailure,
    /// Human-readable explanation
    pub message: String,
    /// Always zero
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl UnpricedNode {
    /// Result for a node type missing from the pricing table
    pub fn not_found(node_type: &str) -> Self {
        Self {
            success: false,
            error: PricingFailure::NodeTypeNotFound,
            message: format!("No pricing configured for node type: {}", node_type),
            price: Decimal::ZERO,
        }
    }
}

/// Outcome of pricing a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceCalculation {
    /// The node was priced automatically
    Priced(NodePrice),
    /// The node could not be priced and is flagged for review
    Unpriced(UnpricedNode),
}

impl PriceCalculation {
    /// Whether the node was priced automatically
    pub fn is_priced(&self) -> bool {
        matches!(self, PriceCalculation::Priced(_))
    }

    /// Final price; zero for unpriced nodes
    pub fn final_price(&self) -> Decimal {
        match self {
            PriceCalculation::Priced(p) => p.final_price,
            PriceCalculation::Unpriced(u) => u.price,
        }
    }

    /// The successful calculation, if any
    pub fn as_priced(&self) -> Option<&NodePrice> {
        match self {
            PriceCalculation::Priced(p) => Some(p),
            PriceCalculation::Unpriced(_) => None,
        }
    }

    /// The failure report, if any
    pub fn as_unpriced(&self) -> Option<&UnpricedNode> {
        match self {
            PriceCalculation::Priced(_) => None,
            PriceCalculation::Unpriced(u) => Some(u),
        }
    }
}
