use anyhow::{Context, Result};
use clap::Parser;
use contribshare::{cli::Cli, config::ReportConfig, pipeline};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; diagnostics go to stderr, the report to stdout
fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.verbosity.as_level());

    let base = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    let config = args.apply_to(base);

    let report = pipeline::generate_report(&config).context("Contribution report failed")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;
    Ok(())
}
