//! Rule catalog - the static if-then knowledge loaded at startup.
//!
//! A catalog is plain data. Entries are not validated here; the inference
//! engine checks each one when it is registered.

mod builtin;

pub use builtin::builtin_rules;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::indicators::{builtin_categories, IndicatorCategory};

/// Errors raised while loading a catalog from TOML.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog declares no rules")]
    EmptyCatalog,
}

/// One catalog entry: conditions, the conclusion they support, and a
/// confidence in (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub conditions: Vec<String>,
    pub conclusion: String,
    pub confidence: f64,
}

impl RuleSpec {
    /// Create a new rule entry.
    pub fn new<I, S>(conditions: I, conclusion: impl Into<String>, confidence: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conditions: conditions.into_iter().map(Into::into).collect(),
            conclusion: conclusion.into(),
            confidence,
        }
    }
}

/// A complete catalog: rules in registration order plus indicator categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    rules: Vec<RuleSpec>,

    #[serde(default)]
    categories: Vec<IndicatorCategory>,
}

impl Catalog {
    /// Create a catalog from explicit rules and categories.
    pub fn new(rules: Vec<RuleSpec>, categories: Vec<IndicatorCategory>) -> Self {
        Self { rules, categories }
    }

    /// The built-in manufacturing catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_rules(), builtin_categories())
    }

    /// Parse a catalog from TOML text.
    ///
    /// ```toml
    /// [[rules]]
    /// conditions = ["unusual_noise", "vibration"]
    /// conclusion = "mechanical_problem"
    /// confidence = 0.75
    ///
    /// [[categories]]
    /// name = "Machine Status"
    /// indicators = ["unusual_noise", "vibration"]
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text)?;
        if catalog.rules.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Indicator categories in display order.
    pub fn categories(&self) -> &[IndicatorCategory] {
        &self.categories
    }

    /// All indicator labels, in category order.
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.indicators.iter().map(String::as_str))
    }

    /// Find the category listing an indicator.
    pub fn category_of(&self, label: &str) -> Option<&IndicatorCategory> {
        self.categories.iter().find(|c| c.contains(label))
    }

    /// Get the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
