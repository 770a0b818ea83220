//! # Diagnosis Core
//!
//! A small forward-chaining rule engine for manufacturing process diagnosis.
//! Observed indicators go into a fact store, the engine matches them against
//! registered if-then rules, and every rule whose conditions are all observed
//! yields a conclusion ranked by its confidence.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Rules, the fact store with its activity log, and the
//!   condition -> conclusion graph derived from the rules
//! - **inference**: The [`InferenceEngine`] and the [`Conclusion`] records it produces
//! - **session**: A per-session owner of one engine, used by front ends
//! - **report**: Human-readable rendering of analysis results
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: Engines are constructed and passed around; there is no global instance
//! - **Pure evaluation**: Evaluating never mutates facts or history
//! - **Static knowledge**: Rules are validated once at registration and never change

pub mod error;
pub mod inference;
pub mod knowledge_base;
pub mod report;
pub mod session;

pub use error::*;
pub use inference::*;
pub use knowledge_base::*;
pub use report::*;
pub use session::*;
