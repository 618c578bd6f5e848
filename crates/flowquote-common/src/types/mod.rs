//! Core data types for Flowquote

pub mod modifier;
pub mod pricing;
pub mod workflow;
