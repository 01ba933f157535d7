//! Report rendering
//!
//! Aggregates are ordered by total changes (descending, ties broken by
//! name ascending) and rendered in the requested format. Nothing is
//! recomputed here.

use crate::aggregate::AggregatedContribution;
use crate::csv_output::CsvOutput;
use crate::error::Result;
use crate::json_output::JsonReport;
use serde::{Deserialize, Serialize};

/// Output format for the contribution report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name> <percent>%` per author (default)
    #[default]
    Text,
    /// `<name> <changes>` with thousands separators
    Counts,
    /// JSON document for machine parsing
    Json,
    /// CSV for spreadsheet analysis
    Csv,
}

/// Sort aggregates for presentation
pub fn sort_aggregates(aggregates: &mut [AggregatedContribution]) {
    aggregates.sort_by(|a, b| {
        b.total_changes
            .cmp(&a.total_changes)
            .then_with(|| a.canonical_name.cmp(&b.canonical_name))
    });
}

/// Format a share in `[0, 1]` as a percentage with two decimals
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format an integer with `,` thousands separators (12063 -> "12,063")
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One `<name> <percent>%` line per author
pub fn text_lines(aggregates: &[AggregatedContribution]) -> Vec<String> {
    aggregates
        .iter()
        .map(|a| format!("{} {}", a.canonical_name, format_percent(a.percent_of_total)))
        .collect()
}

/// One `<name> <changes>` line per author
pub fn count_lines(aggregates: &[AggregatedContribution]) -> Vec<String> {
    aggregates
        .iter()
        .map(|a| format!("{} {}", a.canonical_name, format_thousands(a.total_changes)))
        .collect()
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Sort and render aggregates in the given format
pub fn render(
    mut aggregates: Vec<AggregatedContribution>,
    format: OutputFormat,
) -> Result<String> {
    sort_aggregates(&mut aggregates);

    let rendered = match format {
        OutputFormat::Text => join_lines(text_lines(&aggregates)),
        OutputFormat::Counts => join_lines(count_lines(&aggregates)),
        OutputFormat::Json => {
            let mut json = JsonReport::from_sorted(&aggregates).to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => {
            let mut csv = CsvOutput::new();
            for aggregate in &aggregates {
                csv.add_author(aggregate);
            }
            csv.to_csv()
        }
    };
    Ok(rendered)
}
