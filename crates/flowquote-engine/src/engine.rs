//! Node pricing engine
//!
//! Resolves node types against the pricing table and produces line-itemized
//! price calculations:
//! - Base price per node type
//! - Modifiers in declaration order (per-unit, size-based, boolean, multiplier)
//! - Min/max price rules with explicit adjustment lines
//! - Floor at zero, then rounding to 2 decimal places
//!
//! Calculations are pure reads of the immutable table: no I/O, no shared
//! mutable state, safe to call from any number of concurrent handlers.

use crate::config::EngineConfig;
use crate::table;
use flowquote_common::{
    BreakdownLine, ModifierKind, ModifierRule, ModifierValue, NodePrice, NodeTypePricing,
    PriceCalculation, PriceListEntry, PricingTable, Result, UnpricedNode, DEFAULT_CURRENCY,
    PRICE_SCALE,
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, instrument};

/// Node pricing engine over an immutable pricing table
#[derive(Debug, Clone)]
pub struct PricingEngine {
    table: PricingTable,
}

impl PricingEngine {
    /// Create an engine over an already-loaded table
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    /// Load the table from a JSON file, failing loudly
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(table::load(path)?))
    }

    /// Load the table from a JSON file, degrading to an empty table on failure
    pub fn from_file_or_empty(path: impl AsRef<Path>) -> Self {
        Self::new(table::load_or_empty(path))
    }

    /// Build an engine from configuration
    ///
    /// Strict deployments propagate load errors; the default degrades to an
    /// empty table and reports every node as unpriceable.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        if config.strict_load {
            Self::from_file(&config.table_path)
        } else {
            Ok(Self::from_file_or_empty(&config.table_path))
        }
    }

    /// Pricing rules for a node type, if configured
    pub fn pricing_for_node_type(&self, node_type: &str) -> Option<&NodeTypePricing> {
        self.table.node_types.get(node_type)
    }

    /// All configured node types, sorted
    pub fn available_node_types(&self) -> Vec<String> {
        self.table.node_types.keys().cloned().collect()
    }

    /// Raw global modifier definitions for calling code
    pub fn global_modifiers(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.table.global_modifiers
    }

    /// Catalog of configured node types with their base prices
    pub fn price_list(&self) -> Vec<PriceListEntry> {
        self.table
            .node_types
            .iter()
            .map(|(node_type, pricing)| PriceListEntry {
                node_type: node_type.clone(),
                label: pricing.label.clone(),
                base_price: pricing.base_price,
                currency: node_currency(pricing),
            })
            .collect()
    }

    /// Price a single node
    ///
    /// Never fails: unknown node types come back as an [`UnpricedNode`]
    /// result so callers can route them to manual review.
    #[instrument(skip(self, modifiers))]
    pub fn calculate_price_for_node(
        &self,
        node_type: &str,
        modifiers: &HashMap<String, ModifierValue>,
    ) -> PriceCalculation {
        let Some(pricing) = self.pricing_for_node_type(node_type) else {
            debug!(node_type = %node_type, "Node type not found in pricing table");
            return PriceCalculation::Unpriced(UnpricedNode::not_found(node_type));
        };

        let mut price = pricing.base_price;
        let mut breakdown = vec![BreakdownLine::new(
            format!("{} (base)", pricing.label),
            pricing.base_price,
        )];

        for rule in &pricing.modifiers {
            // Absent and null values skip the rule entirely
            let Some(value) = modifiers.get(&rule.name) else {
                continue;
            };
            if value.is_null() {
                continue;
            }

            let (amount, description) = apply_modifier(rule, value, price);
            price += amount;
            breakdown.push(BreakdownLine::new(description, amount));
        }

        // Clamps run after all modifiers: min first, then max, each with its
        // own adjustment line only when it changes the price
        if let Some(min) = pricing.price_rules.min {
            if price < min {
                breakdown.push(BreakdownLine::new("Minimum price adjustment", min - price));
                price = min;
            }
        }
        if let Some(max) = pricing.price_rules.max {
            if price > max {
                breakdown.push(BreakdownLine::new("Maximum price adjustment", max - price));
                price = max;
            }
        }

        let final_price = price
            .max(Decimal::ZERO)
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        debug!(
            node_type = %node_type,
            final_price = %final_price,
            lines = breakdown.len(),
            "Priced node"
        );

        PriceCalculation::Priced(NodePrice {
            success: true,
            node_type: node_type.to_string(),
            base_price: pricing.base_price,
            final_price,
            breakdown,
            currency: node_currency(pricing),
        })
    }
}

fn node_currency(pricing: &NodeTypePricing) -> String {
    pricing
        .price_rules
        .currency
        .clone()
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Compute one modifier's charge and its breakdown description
fn apply_modifier(
    rule: &ModifierRule,
    value: &ModifierValue,
    running_total: Decimal,
) -> (Decimal, String) {
    match &rule.kind {
        ModifierKind::PerUnit => (
            numeric_quantity(rule, value) * rule.price_per_unit,
            format!("{}: {} × ${}", rule.name, value, rule.price_per_unit),
        ),
        ModifierKind::PerMb => (
            numeric_quantity(rule, value) * rule.price_per_unit,
            format!("{}: {} MB × ${}", rule.name, value, rule.price_per_unit),
        ),
        ModifierKind::PerKb => (
            numeric_quantity(rule, value) * rule.price_per_unit,
            format!("{}: {} KB × ${}", rule.name, value, rule.price_per_unit),
        ),
        ModifierKind::Boolean => {
            if value.is_truthy() {
                (
                    rule.price_per_unit,
                    format!("{}: Yes (+${:.2})", rule.name, rule.price_per_unit),
                )
            } else {
                (Decimal::ZERO, format!("{}: No (+$0.00)", rule.name))
            }
        }
        // Scales the running total accumulated so far, not the base price;
        // any defined value triggers it, truthy or not
        ModifierKind::Multiplier => (
            running_total * (rule.price_per_unit - Decimal::ONE),
            format!("{}: ×{}", rule.name, rule.price_per_unit),
        ),
        ModifierKind::Other(_) => (
            Decimal::ZERO,
            format!("{}: Unknown modifier type", rule.name),
        ),
    }
}

fn numeric_quantity(rule: &ModifierRule, value: &ModifierValue) -> Decimal {
    value.as_quantity().unwrap_or_else(|| {
        debug!(
            modifier = %rule.name,
            value = %value,
            "Non-numeric modifier value, treating as zero quantity"
        );
        Decimal::ZERO
    })
}
