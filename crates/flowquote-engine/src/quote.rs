//! Workflow-level quoting
//!
//! Prices every node of a parsed workflow and aggregates the results into a
//! single quote. Nodes the engine cannot price automatically are flagged for
//! manual review instead of failing the whole quote.

use crate::engine::PricingEngine;
use flowquote_common::{
    PriceCalculation, QuoteLineItem, ReviewFlag, WorkflowNode, WorkflowQuote, DEFAULT_CURRENCY,
    PRICE_SCALE,
};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

impl PricingEngine {
    /// Price every node of a parsed workflow and aggregate the results
    ///
    /// The subtotal covers successfully priced nodes only; unpriced nodes
    /// appear as review flags and keep their line items with the failure
    /// payload so clients can render both.
    #[instrument(skip(self, nodes))]
    pub fn quote_workflow(&self, nodes: &[WorkflowNode]) -> WorkflowQuote {
        let mut subtotal = Decimal::ZERO;
        let mut currency: Option<String> = None;
        let mut priced_node_count = 0;
        let mut line_items = Vec::with_capacity(nodes.len());
        let mut review_flags = Vec::new();

        for node in nodes {
            let pricing = self.calculate_price_for_node(&node.node_type, &node.modifiers);

            match &pricing {
                PriceCalculation::Priced(price) => {
                    subtotal += price.final_price;
                    priced_node_count += 1;

                    match &currency {
                        None => currency = Some(price.currency.clone()),
                        Some(expected) if *expected != price.currency => {
                            // Summed as-is; the table author controls currencies
                            warn!(
                                expected = %expected,
                                got = %price.currency,
                                node_type = %node.node_type,
                                "Mixed currencies in workflow quote"
                            );
                        }
                        Some(_) => {}
                    }
                }
                PriceCalculation::Unpriced(failure) => {
                    review_flags.push(ReviewFlag {
                        node_id: node.id.clone(),
                        node_type: node.node_type.clone(),
                        reason: failure.message.clone(),
                    });
                }
            }

            line_items.push(QuoteLineItem {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
                node_type: node.node_type.clone(),
                pricing,
            });
        }

        let requires_review = !review_flags.is_empty();
        let quote = WorkflowQuote {
            quote_id: Uuid::new_v4(),
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            subtotal: subtotal
                .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero),
            priced_node_count,
            line_items,
            review_flags,
            requires_review,
            generated_at: chrono::Utc::now(),
        };

        debug!(
            quote_id = %quote.quote_id,
            nodes = nodes.len(),
            priced = quote.priced_node_count,
            flagged = quote.review_flags.len(),
            subtotal = %quote.subtotal,
            "Generated workflow quote"
        );

        quote
    }
}
