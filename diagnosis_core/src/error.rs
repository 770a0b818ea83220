//! Error types for the diagnosis core.

use thiserror::Error;

/// Reasons a rule definition is rejected at registration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRuleDefinition {
    #[error("rule has no conditions")]
    EmptyConditions,

    #[error("confidence {confidence} is outside (0, 1]")]
    ConfidenceOutOfRange { confidence: f64 },

    #[error("rule has a blank condition label")]
    BlankCondition,

    #[error("rule has a blank conclusion label")]
    BlankConclusion,
}

/// Top-level error for the diagnosis core.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("invalid rule definition: {0}")]
    InvalidRule(#[from] InvalidRuleDefinition),

    #[error("failed to export graph: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
