//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Manufacturing process diagnosis from observed indicators
#[derive(Parser, Debug)]
#[command(name = "diagnose")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML shell configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a TOML rule catalog, replacing the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
