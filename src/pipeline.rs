//! End-to-end report generation

use crate::aggregate::aggregate;
use crate::alias::AliasTable;
use crate::config::ReportConfig;
use crate::contributions::load_contributions;
use crate::error::Result;
use crate::report::render;

/// Load both inputs, aggregate and render the report
///
/// The rendered report is only returned once every stage succeeded, so a
/// failing run never produces partial output.
pub fn generate_report(config: &ReportConfig) -> Result<String> {
    let aliases = AliasTable::from_file(&config.authors)?;
    let records = load_contributions(&config.contributions)?;
    let source_name = config.contributions.display().to_string();
    let aggregates = aggregate(&source_name, &aliases, &records, config.unmapped)?;
    tracing::info!(
        authors = aggregates.len(),
        format = ?config.format,
        "rendering contribution report"
    );
    render(aggregates, config.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContribError;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(authors: &str, contributions: &str) -> (TempDir, ReportConfig) {
        let dir = TempDir::new().unwrap();
        let authors_path = dir.path().join("authors.json");
        let contributions_path = dir.path().join("contributions.txt");
        fs::write(&authors_path, authors).unwrap();
        fs::write(&contributions_path, contributions).unwrap();

        let config = ReportConfig {
            authors: authors_path,
            contributions: contributions_path,
            ..ReportConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn test_alice_and_bob_report() {
        let (_dir, config) = write_inputs(
            r#"{"a@x.com": "Alice", "b@x.com": "Alice", "c@x.com": "Bob"}"#,
            "a@x.com 100\nb@x.com 50\nc@x.com 50\n",
        );
        assert_eq!(generate_report(&config).unwrap(), "Alice 75.00%\nBob 25.00%\n");
    }

    #[test]
    fn test_counts_report_merges_aliases() {
        let (_dir, mut config) = write_inputs(
            r#"{"a@x.com": "Alice", "b@x.com": "Alice"}"#,
            "a@x.com 12,063\nb@x.com 1,000\n",
        );
        config.format = OutputFormat::Counts;
        assert_eq!(generate_report(&config).unwrap(), "Alice 13,063\n");
    }

    #[test]
    fn test_unmapped_author_fails_run() {
        let (_dir, config) = write_inputs(r#"{"a@x.com": "Alice"}"#, "a@x.com 1\nz@x.com 2\n");
        let result = generate_report(&config);
        assert!(matches!(result, Err(ContribError::UnmappedAuthor { .. })));
    }

    #[test]
    fn test_empty_contributions_render_nothing() {
        let (_dir, config) = write_inputs(r#"{"a@x.com": "Alice"}"#, "");
        assert_eq!(generate_report(&config).unwrap(), "");
    }

    #[test]
    fn test_malformed_alias_table_fails_run() {
        let (_dir, config) = write_inputs(r#"{"a@x.com": ["Alice"]}"#, "a@x.com 1\n");
        let result = generate_report(&config);
        assert!(matches!(result, Err(ContribError::MalformedInput { .. })));
    }
}
