//! Knowledge Graph - the condition -> conclusion view of the registered rules.
//!
//! The graph is derived data for display only. It holds no inference logic and
//! is kept in step with the rule set by adding each rule as it is registered.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::Rule;

/// What a label is used as across the registered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    /// Appears only as a rule condition.
    Indicator,
    /// Appears only as a rule conclusion.
    Conclusion,
    /// Used as both, e.g. when one rule's conclusion is another's condition.
    Both,
}

/// Directed graph with one edge per distinct (condition, conclusion) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    /// Adjacency list: condition -> conclusions.
    outgoing: BTreeMap<String, BTreeSet<String>>,

    /// Reverse index: conclusion -> conditions.
    incoming: BTreeMap<String, BTreeSet<String>>,
}

impl KnowledgeGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edges of a rule: one per condition, pointing at its conclusion.
    ///
    /// Edges already present collapse; there are no multi-edges.
    pub fn add_rule(&mut self, rule: &Rule) {
        for condition in rule.conditions() {
            self.add_edge(condition, rule.conclusion());
        }
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.outgoing
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        self.incoming
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string());
    }

    /// Conclusions directly supported by a condition.
    pub fn conclusions_of(&self, condition: &str) -> Vec<&str> {
        self.outgoing
            .get(condition)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Conditions pointing at a conclusion.
    pub fn conditions_of(&self, conclusion: &str) -> Vec<&str> {
        self.incoming
            .get(conclusion)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Role of a label in the graph, or `None` if it is not a node.
    pub fn node_role(&self, label: &str) -> Option<NodeRole> {
        match (
            self.outgoing.contains_key(label),
            self.incoming.contains_key(label),
        ) {
            (true, true) => Some(NodeRole::Both),
            (true, false) => Some(NodeRole::Indicator),
            (false, true) => Some(NodeRole::Conclusion),
            (false, false) => None,
        }
    }

    /// Check if a label is a node of the graph.
    pub fn has_node(&self, label: &str) -> bool {
        self.node_role(label).is_some()
    }

    /// All node labels, sorted.
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.outgoing
            .keys()
            .chain(self.incoming.keys())
            .map(String::as_str)
            .collect()
    }

    /// All edges as (condition, conclusion) pairs, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outgoing
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from.as_str(), to.as_str())))
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Owned copy of the graph for the visualization collaborator.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().into_iter().map(str::to_string).collect(),
            edges: self
                .edges()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

/// Nodes and edges of the knowledge graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: BTreeSet<String>,
    pub edges: BTreeSet<(String, String)>,
}

impl GraphSnapshot {
    /// Serialize as JSON: `{"nodes": [...], "edges": [[from, to], ...]}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export as a Graphviz digraph.
    ///
    /// Nodes that are never a conclusion are drawn as ellipses, conclusions as boxes.
    pub fn to_dot(&self) -> String {
        let conclusions: BTreeSet<&str> = self.edges.iter().map(|(_, to)| to.as_str()).collect();

        let mut dot = String::new();
        dot.push_str("digraph KnowledgeGraph {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [style=filled, fillcolor=\"lightgreen\", fontsize=8];\n");
        dot.push_str("    edge [color=\"gray\"];\n");
        dot.push('\n');

        for node in &self.nodes {
            let shape = if conclusions.contains(node.as_str()) {
                "box"
            } else {
                "ellipse"
            };
            dot.push_str(&format!(
                "    \"{}\" [shape={}];\n",
                escape_dot_string(node),
                shape
            ));
        }

        if !self.edges.is_empty() {
            dot.push('\n');
        }
        for (from, to) in &self.edges {
            dot.push_str(&format!(
                "    \"{}\" -> \"{}\";\n",
                escape_dot_string(from),
                escape_dot_string(to)
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
