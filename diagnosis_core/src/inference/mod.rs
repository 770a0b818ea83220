//! Inference Engine - matches observed facts against the registered rules.
//!
//! Evaluation works as follows:
//! 1. **Match**: Each rule, in registration order, fires iff its conditions are a subset of the facts
//! 2. **Collect**: Every firing rule yields a conclusion; rules are independent, so a
//!    mild and a severe diagnosis of the same family can fire together
//! 3. **Rank**: Conclusions are stably sorted by confidence, highest first, so ties keep
//!    registration order
//!
//! Evaluation is a pure query: it never touches the facts or the history.

mod conclusion;

pub use conclusion::*;

use process_catalog::{Catalog, RuleSpec};
use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::knowledge_base::{FactStore, GraphSnapshot, KnowledgeGraph, Rule, RuleId};

/// Rule registry plus the observations of one diagnostic session.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    /// Registered rules by id; id order is registration order.
    rules: BTreeMap<RuleId, Rule>,

    next_id: RuleId,

    facts: FactStore,

    graph: KnowledgeGraph,
}

impl InferenceEngine {
    /// Create an engine with no rules and no facts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with every rule of a catalog registered in order.
    ///
    /// Fails on the first malformed rule.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        let mut engine = Self::new();
        for spec in catalog.rules() {
            engine.register_spec(spec)?;
        }
        tracing::info!(rules = engine.rule_count(), "loaded rule catalog");
        Ok(engine)
    }

    /// Validate and register a rule, returning its id.
    ///
    /// A rejected rule consumes no id and leaves the registry untouched.
    pub fn register_rule<I, S>(
        &mut self,
        conditions: I,
        conclusion: &str,
        confidence: f64,
    ) -> Result<RuleId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = self.next_id;
        let rule = Rule::new(id, conditions, conclusion, confidence).map_err(|e| {
            tracing::warn!(conclusion, error = %e, "rejected rule definition");
            e
        })?;

        self.graph.add_rule(&rule);
        tracing::debug!(
            rule_id = %id,
            conclusion = rule.conclusion(),
            conditions = rule.conditions().len(),
            confidence = rule.confidence(),
            "registered rule"
        );

        self.rules.insert(id, rule);
        self.next_id = id.next();
        Ok(id)
    }

    /// Register a catalog entry.
    pub fn register_spec(&mut self, spec: &RuleSpec) -> Result<RuleId> {
        self.register_rule(&spec.conditions, &spec.conclusion, spec.confidence)
    }

    /// Add an observed fact. See [`FactStore::add_fact`].
    pub fn add_fact(&mut self, label: &str) -> bool {
        let inserted = self.facts.add_fact(label);
        tracing::debug!(label, inserted, "added fact");
        inserted
    }

    /// Remove every fact. Rules and history are kept.
    pub fn clear_facts(&mut self) -> usize {
        let removed = self.facts.clear();
        tracing::debug!(removed, "cleared facts");
        removed
    }

    /// Append a caller-formatted entry to the history.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.facts.record(entry);
    }

    pub fn current_facts(&self) -> &HashSet<String> {
        self.facts.facts()
    }

    /// Distinct current facts in first-insertion order.
    pub fn facts_in_order(&self) -> &[String] {
        self.facts.facts_in_order()
    }

    pub fn fact_store(&self) -> &FactStore {
        &self.facts
    }

    pub fn history(&self) -> &[String] {
        self.facts.history()
    }

    /// Evaluate every rule against the current facts.
    ///
    /// Returns one conclusion per firing rule, highest confidence first.
    /// Conclusions with the same label from different rules are all kept.
    pub fn evaluate(&self) -> Vec<Conclusion> {
        let facts = self.facts.facts();

        let mut conclusions: Vec<Conclusion> = self
            .rules
            .values()
            .filter(|rule| rule.is_satisfied_by(facts))
            .map(Conclusion::from)
            .collect();

        // Stable: equal confidence keeps registration order
        conclusions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::info!(
            facts = facts.len(),
            rules = self.rules.len(),
            fired = conclusions.len(),
            "evaluated rules"
        );
        conclusions
    }

    /// Get a rule by id.
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(&id)
    }

    /// All rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Conditions of a rule not yet observed, or `None` for an unknown id.
    pub fn missing_conditions(&self, id: RuleId) -> Option<Vec<&str>> {
        self.rules
            .get(&id)
            .map(|rule| rule.missing_from(self.facts.facts()))
    }

    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    /// Nodes and edges derived from every registered rule.
    pub fn graph_snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }
}
