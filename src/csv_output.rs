//! CSV output format for contribution reports

use crate::aggregate::AggregatedContribution;

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput<'a> {
    authors: Vec<&'a AggregatedContribution>,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an author row; rows are written in insertion order
    pub fn add_author(&mut self, aggregate: &'a AggregatedContribution) {
        self.authors.push(aggregate);
    }

    fn header() -> &'static str {
        "author,changes,percent"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_author(author: &AggregatedContribution) -> String {
        format!(
            "{},{},{:.2}",
            Self::escape_field(&author.canonical_name),
            author.total_changes,
            author.percent_of_total * 100.0
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for author in &self.authors {
            output.push_str(&Self::format_author(author));
            output.push('\n');
        }

        output
    }
}
