//! Prices a small demo workflow against the shipped pricing table
//!
//! Run from the repository root so the default table path resolves:
//!
//! ```text
//! cargo run --example price_workflow
//! ```

use flowquote_common::{Result, WorkflowNode};
use flowquote_engine::{EngineConfig, PricingEngine};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Flowquote demo v{}", flowquote_common::VERSION);

    let config = EngineConfig::load()?;
    let engine = PricingEngine::from_config(&config)?;
    info!(
        node_types = engine.available_node_types().len(),
        "Pricing engine ready"
    );

    let nodes = vec![
        WorkflowNode::new("n1", "Fetch orders", "httpRequest")
            .with_modifier("concurrency", 3)
            .with_modifier("attachment_mb", 10),
        WorkflowNode::new("n2", "Parse invoices", "documentParse")
            .with_modifier("pages", 12)
            .with_modifier("ocr", true),
        WorkflowNode::new("n3", "Summarize", "aiAgent")
            .with_modifier("context_mb", 4)
            .with_modifier("model_tier", true),
        WorkflowNode::new("n4", "Custom legacy step", "mainframeBridge"),
    ];

    let quote = engine.quote_workflow(&nodes);
    println!("{}", serde_json::to_string_pretty(&quote).expect("quote serializes"));

    if quote.requires_review {
        info!(
            flagged = quote.review_flags.len(),
            "Some nodes need manual pricing"
        );
    }

    Ok(())
}
