//! Report configuration
//!
//! Defaults reproduce the plain invocation: `authors.json` and
//! `contributions.txt` in the working directory, text report, unmapped
//! emails rejected. A TOML file can override any of these, and command-line
//! flags override the file.
//!
//! ```toml
//! authors = "data/authors.json"
//! contributions = "data/contributions.txt"
//! format = "counts"
//! unmapped = "keep-email"
//! ```

use crate::aggregate::UnmappedPolicy;
use crate::error::{ContribError, Result};
use crate::report::OutputFormat;
use crate::source::read_utf8;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_AUTHORS_PATH: &str = "authors.json";
pub const DEFAULT_CONTRIBUTIONS_PATH: &str = "contributions.txt";

/// Inputs and rendering options for one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Alias table (JSON object of email -> canonical name)
    pub authors: PathBuf,
    /// Two-column `<email> <count>` contribution source
    pub contributions: PathBuf,
    pub format: OutputFormat,
    pub unmapped: UnmappedPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            authors: PathBuf::from(DEFAULT_AUTHORS_PATH),
            contributions: PathBuf::from(DEFAULT_CONTRIBUTIONS_PATH),
            format: OutputFormat::default(),
            unmapped: UnmappedPolicy::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source_name: &str, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ContribError::malformed(source_name, e.to_string()))
    }

    /// Load a configuration from a TOML file
    ///
    /// Relative input paths in the file are resolved against the file's
    /// directory, so a config can live next to its data.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_utf8(path)?;

        let mut config = Self::from_toml_str(&path.display().to_string(), &contents)?;
        if let Some(base) = path.parent() {
            config.authors = resolve_relative(base, &config.authors);
            config.contributions = resolve_relative(base, &config.contributions);
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.authors, PathBuf::from("authors.json"));
        assert_eq!(config.contributions, PathBuf::from("contributions.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.unmapped, UnmappedPolicy::Reject);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ReportConfig::from_toml_str("report.toml", "format = \"counts\"\n").unwrap();
        assert_eq!(config.format, OutputFormat::Counts);
        assert_eq!(config.authors, PathBuf::from("authors.json"));
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            authors = "/data/authors.json"
            contributions = "/data/contributions.txt"
            format = "json"
            unmapped = "keep-email"
        "#;
        let config = ReportConfig::from_toml_str("report.toml", toml).unwrap();
        assert_eq!(config.authors, PathBuf::from("/data/authors.json"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.unmapped, UnmappedPolicy::KeepEmail);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ReportConfig::from_toml_str("report.toml", "colour = \"blue\"\n");
        assert!(matches!(result, Err(ContribError::MalformedInput { .. })));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = ReportConfig::from_toml_str("report.toml", "format = \"xml\"\n");
        assert!(matches!(result, Err(ContribError::MalformedInput { .. })));
    }

    #[test]
    fn test_relative_paths_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "authors = \"aliases/authors.json\"").unwrap();
        writeln!(file, "contributions = \"/abs/contributions.txt\"").unwrap();

        let config = ReportConfig::from_file(&path).unwrap();
        assert_eq!(config.authors, dir.path().join("aliases/authors.json"));
        assert_eq!(config.contributions, PathBuf::from("/abs/contributions.txt"));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ReportConfig::from_file("/nonexistent/report.toml");
        assert!(matches!(result, Err(ContribError::Io { .. })));
    }
}
