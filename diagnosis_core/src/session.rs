//! Diagnostic sessions - one engine per operator session.

use process_catalog::Catalog;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::inference::InferenceEngine;
use crate::report::AnalysisReport;

/// Unique identifier for diagnostic sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns the engine for a single diagnostic session.
///
/// Front ends hold one of these per operator; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct DiagnosticSession {
    id: SessionId,
    engine: InferenceEngine,
}

impl DiagnosticSession {
    /// Start a session around an already populated engine.
    pub fn new(engine: InferenceEngine) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, rules = engine.rule_count(), "started diagnostic session");
        Self { id, engine }
    }

    /// Start a session with every rule of a catalog registered.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        Ok(Self::new(InferenceEngine::from_catalog(catalog)?))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Record an observed indicator.
    pub fn add_indicator(&mut self, label: &str) -> bool {
        self.engine.add_fact(label)
    }

    /// Forget every observed indicator.
    pub fn clear_indicators(&mut self) -> usize {
        self.engine.clear_facts()
    }

    /// Evaluate the current indicators.
    ///
    /// A non-empty result is appended to the history as formatted text; an
    /// analysis that finds nothing is not logged.
    pub fn analyze(&mut self) -> AnalysisReport {
        let report = AnalysisReport::new(self.engine.evaluate());
        if !report.is_empty() {
            self.engine.record(report.to_display_string());
        }
        tracing::debug!(session = %self.id, conclusions = report.len(), "analysis finished");
        report
    }

    pub fn history(&self) -> &[String] {
        self.engine.history()
    }
}
