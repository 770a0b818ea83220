//! Fact store - the currently observed indicators and the session activity log.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalize a fact or rule label: trim surrounding whitespace and lowercase.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_label(label: &str) -> Option<String> {
    let normalized = label.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Mutable set of observed facts plus an append-only history.
///
/// The history records user actions, not net state changes: adding a fact
/// that is already present leaves the set untouched but is still logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactStore {
    facts: HashSet<String>,

    /// Distinct facts in first-insertion order, for display.
    order: Vec<String>,

    history: Vec<String>,
}

impl FactStore {
    /// Create a new empty fact store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observed fact.
    ///
    /// Blank labels are ignored without a history entry. Returns `true` when
    /// the fact was not already present.
    pub fn add_fact(&mut self, label: &str) -> bool {
        let Some(label) = normalize_label(label) else {
            return false;
        };

        self.history.push(format!("Added indicator: {}", label));

        let inserted = self.facts.insert(label.clone());
        if inserted {
            self.order.push(label);
        }
        inserted
    }

    /// Remove every fact and log the action once.
    ///
    /// Returns the number of facts removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.facts.len();
        self.facts.clear();
        self.order.clear();
        self.history.push("Cleared all indicators".to_string());
        removed
    }

    /// Append a caller-formatted entry to the history.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    /// Read-only view of the current facts.
    pub fn facts(&self) -> &HashSet<String> {
        &self.facts
    }

    /// Distinct current facts in the order they were first added.
    pub fn facts_in_order(&self) -> &[String] {
        &self.order
    }

    /// Check if a fact is currently observed. The label is normalized first.
    pub fn contains(&self, label: &str) -> bool {
        normalize_label(label)
            .map(|l| self.facts.contains(&l))
            .unwrap_or(false)
    }

    /// Get the number of current facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// The full activity log, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
