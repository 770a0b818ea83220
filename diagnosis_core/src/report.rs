//! Human-readable rendering of analysis results.

use serde::{Deserialize, Serialize};

use crate::inference::Conclusion;

const NO_ISSUES: &str = "No issues identified with current indicators.";

/// Turn a label into display text: `"tool_wear"` becomes `"Tool Wear"`.
pub fn display_label(label: &str) -> String {
    label
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a confidence fraction as a whole percentage, e.g. `0.75` -> `"75%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// The ranked outcome of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub conclusions: Vec<Conclusion>,
}

impl AnalysisReport {
    /// Wrap already-ranked conclusions.
    pub fn new(conclusions: Vec<Conclusion>) -> Self {
        Self { conclusions }
    }

    pub fn is_empty(&self) -> bool {
        self.conclusions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conclusions.len()
    }

    /// The highest-ranked conclusion, if any rule fired.
    pub fn top(&self) -> Option<&Conclusion> {
        self.conclusions.first()
    }

    /// Format the report for display and for the history log.
    pub fn to_display_string(&self) -> String {
        if self.conclusions.is_empty() {
            return NO_ISSUES.to_string();
        }

        let mut text = String::from("Analysis Results:\n");
        for c in &self.conclusions {
            text.push_str(&format!("- {}\n", display_label(&c.conclusion)));
            text.push_str(&format!(
                "  Confidence: {}\n",
                format_confidence(c.confidence)
            ));
        }
        text
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
