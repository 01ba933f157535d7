//! JSON output format for contribution reports

use crate::aggregate::AggregatedContribution;
use serde::{Deserialize, Serialize};

/// One author's line in the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAuthor {
    /// Canonical author name
    pub name: String,
    /// Total changes across all of the author's aliases
    pub changes: u64,
    /// Percentage of all changes (0.0 to 100.0)
    pub percent: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Sum of all authors' changes
    pub total_changes: u64,
    /// Authors in report order
    pub authors: Vec<JsonAuthor>,
}

impl JsonReport {
    /// Build a report from aggregates that are already in report order
    pub fn from_sorted(aggregates: &[AggregatedContribution]) -> Self {
        let authors: Vec<JsonAuthor> = aggregates
            .iter()
            .map(|a| JsonAuthor {
                name: a.canonical_name.clone(),
                changes: a.total_changes,
                percent: a.percent_of_total * 100.0,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "contribshare-json-v1".to_string(),
            total_changes: authors.iter().map(|a| a.changes).sum(),
            authors,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(name: &str, total_changes: u64, percent_of_total: f64) -> AggregatedContribution {
        AggregatedContribution {
            canonical_name: name.to_string(),
            total_changes,
            percent_of_total,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = JsonReport::from_sorted(&[]);
        assert_eq!(report.format, "contribshare-json-v1");
        assert_eq!(report.total_changes, 0);
        assert!(report.authors.is_empty());
    }

    #[test]
    fn test_report_keeps_order_and_sums() {
        let report = JsonReport::from_sorted(&[agg("Alice", 150, 0.75), agg("Bob", 50, 0.25)]);
        assert_eq!(report.total_changes, 200);
        assert_eq!(report.authors[0].name, "Alice");
        assert_eq!(report.authors[1].name, "Bob");
    }

    #[test]
    fn test_json_serialization() {
        let report = JsonReport::from_sorted(&[agg("Mátyás Fodor", 12063, 1.0)]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"name\": \"Mátyás Fodor\""));
        assert!(json.contains("\"changes\": 12063"));
        assert!(json.contains("\"format\": \"contribshare-json-v1\""));

        let parsed: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.authors[0].percent, 100.0);
    }

    #[test]
    fn test_json_key_sets() {
        let report = JsonReport::from_sorted(&[agg("Alice", 150, 0.75), agg("Bob", 50, 0.25)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let mut root_keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        root_keys.sort_unstable();
        assert_eq!(root_keys, vec!["authors", "format", "total_changes", "version"]);

        let mut author_keys: Vec<&str> = value["authors"][0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        author_keys.sort_unstable();
        assert_eq!(author_keys, vec!["changes", "name", "percent"]);
        assert_eq!(value["authors"][0]["percent"], 75.0);
    }
}
