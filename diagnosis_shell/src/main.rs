use anyhow::{Context, Result};
use diagnosis_core::DiagnosticSession;
use diagnosis_shell::{Cli, Shell, ShellConfig};
use process_catalog::Catalog;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = ShellConfig::from_cli(&cli)?;

    // Logs go to stderr so the transcript on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    // A malformed rule in fixed catalog data is a programming error: abort.
    let session =
        DiagnosticSession::from_catalog(&catalog).context("rule catalog is malformed")?;
    tracing::info!(session = %session.id(), "diagnosis shell ready");

    let mut shell = Shell::new(session, catalog, config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
