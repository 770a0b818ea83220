//! Rule definitions - the if-then knowledge matched against observed facts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::normalize_label;
use crate::error::InvalidRuleDefinition;

/// Identifier assigned to a rule at registration.
///
/// Ids are sequential in registration order and never reused.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RuleId(pub u32);

impl RuleId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rule fires when every one of its conditions is an observed fact.
///
/// Rules are validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    id: RuleId,

    /// Normalized condition labels; order is irrelevant and duplicates collapse.
    conditions: BTreeSet<String>,

    /// Normalized label of the diagnosed condition.
    conclusion: String,

    /// Static confidence in (0, 1], used only for ranking.
    confidence: f64,
}

impl Rule {
    /// Validate and build a rule.
    ///
    /// Condition and conclusion labels are normalized the same way observed
    /// facts are, so they share one namespace.
    pub fn new<I, S>(
        id: RuleId,
        conditions: I,
        conclusion: &str,
        confidence: f64,
    ) -> Result<Self, InvalidRuleDefinition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = conditions.into_iter().collect();
        if raw.is_empty() {
            return Err(InvalidRuleDefinition::EmptyConditions);
        }

        // NaN fails both comparisons
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(InvalidRuleDefinition::ConfidenceOutOfRange { confidence });
        }

        let conditions = raw
            .iter()
            .map(|c| normalize_label(c.as_ref()).ok_or(InvalidRuleDefinition::BlankCondition))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let conclusion =
            normalize_label(conclusion).ok_or(InvalidRuleDefinition::BlankConclusion)?;

        Ok(Self {
            id,
            conditions,
            conclusion,
            confidence,
        })
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn conditions(&self) -> &BTreeSet<String> {
        &self.conditions
    }

    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Check if every condition of this rule is present in `facts`.
    ///
    /// Extra facts never disqualify a rule.
    pub fn is_satisfied_by(&self, facts: &HashSet<String>) -> bool {
        self.conditions.iter().all(|c| facts.contains(c))
    }

    /// Conditions of this rule not present in `facts`.
    pub fn missing_from<'a>(&'a self, facts: &HashSet<String>) -> Vec<&'a str> {
        self.conditions
            .iter()
            .filter(|c| !facts.contains(*c))
            .map(String::as_str)
            .collect()
    }
}
