//! Knowledge Base module - the static rules and the mutable observations.
//!
//! - **Rules**: Immutable condition sets with a conclusion and a confidence
//! - **Facts**: Indicator labels currently observed, plus an append-only activity log
//! - **Graph**: Condition -> conclusion edges derived from the registered rules

mod fact_store;
mod graph;
mod rule;

pub use fact_store::*;
pub use graph::*;
pub use rule::*;
