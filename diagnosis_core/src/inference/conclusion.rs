//! Conclusion records produced by evaluation.

use serde::{Deserialize, Serialize};

use crate::knowledge_base::{Rule, RuleId};

/// A diagnosed condition supported by one firing rule.
///
/// Conclusions are produced fresh by every evaluation and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    pub conclusion: String,

    /// Confidence as a fraction in (0, 1].
    pub confidence: f64,

    pub rule_id: RuleId,
}

impl From<&Rule> for Conclusion {
    fn from(rule: &Rule) -> Self {
        Self {
            conclusion: rule.conclusion().to_string(),
            confidence: rule.confidence(),
            rule_id: rule.id(),
        }
    }
}
