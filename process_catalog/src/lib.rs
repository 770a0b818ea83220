//! # Process Catalog
//!
//! The domain knowledge for manufacturing process diagnosis: which indicators an
//! operator can observe and which rules connect them to likely root causes.
//! This crate is the single source of truth for that data and does not contain
//! any inference logic.

pub mod catalog;
pub mod indicators;

pub use catalog::*;
pub use indicators::*;
