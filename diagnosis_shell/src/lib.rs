//! # Diagnosis Shell
//!
//! A line-oriented terminal front end for manufacturing process diagnosis.
//! It only feeds indicator labels into a [`diagnosis_core::DiagnosticSession`]
//! and renders what the session returns; all inference lives in `diagnosis_core`.

pub mod args;
pub mod commands;
pub mod config;
pub mod repl;

pub use args::*;
pub use commands::*;
pub use config::*;
pub use repl::*;
