//! Shell configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::Cli;

/// Settings for a shell run, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Rule catalog to load instead of the built-in one.
    pub catalog: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Whether to point out indicators that would complete a diagnosis.
    pub show_hints: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            log_filter: "warn".to_string(),
            show_hints: true,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid shell configuration")
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Resolve the configuration for a run: file first, then flag overrides.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(catalog) = &cli.catalog {
            config.catalog = Some(catalog.clone());
        }
        Ok(config)
    }
}
