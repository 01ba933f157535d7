//! CLI argument parsing for contribshare

use crate::aggregate::UnmappedPolicy;
use crate::config::ReportConfig;
use crate::report::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log level for diagnostics on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn as_level(self) -> tracing::Level {
        match self {
            Verbosity::Error => tracing::Level::ERROR,
            Verbosity::Warn => tracing::Level::WARN,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
            Verbosity::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "contribshare")]
#[command(version)]
#[command(
    about = "Per-author share of code changes, merging email aliases into canonical names",
    long_about = None
)]
pub struct Cli {
    /// Contribution file with `<email> <count>` lines [default: contributions.txt]
    #[arg(value_name = "CONTRIBUTIONS")]
    pub contributions: Option<PathBuf>,

    /// Alias table mapping emails to canonical names [default: authors.json]
    #[arg(short = 'a', long = "authors", value_name = "PATH")]
    pub authors: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Handling of emails missing from the alias table [default: reject]
    #[arg(long = "unmapped", value_enum)]
    pub unmapped: Option<UnmappedPolicy>,

    /// TOML config file; command-line flags take precedence
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level written to stderr
    #[arg(long = "verbosity", value_enum, default_value = "warn")]
    pub verbosity: Verbosity,
}

impl Cli {
    /// Overlay explicitly given flags onto a base configuration
    pub fn apply_to(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(path) = &self.contributions {
            config.contributions = path.clone();
        }
        if let Some(path) = &self.authors {
            config.authors = path.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(unmapped) = self.unmapped {
            config.unmapped = unmapped;
        }
        config
    }
}
