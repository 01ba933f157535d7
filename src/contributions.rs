//! Contribution source parsing
//!
//! One record per line: `<email> <count>`, whitespace separated. Counts may
//! carry `,` thousands separators (`277,708`), which are stripped before
//! conversion. Whitespace-only lines are skipped.

use crate::error::{ContribError, Result};
use crate::source::read_utf8;
use std::path::Path;

/// Change count attributed to one email by one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRecord {
    pub email: String,
    pub change_count: u64,
}

impl ContributionRecord {
    pub fn new(email: impl Into<String>, change_count: u64) -> Self {
        Self {
            email: email.into(),
            change_count,
        }
    }
}

/// Parse a change count, removing `,` thousands separators
///
/// Only ASCII digits remain acceptable after the separators are removed,
/// so signs, decimals and empty counts are rejected.
pub fn parse_change_count(field: &str) -> std::result::Result<u64, String> {
    let digits: String = field.chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "change count {:?} is not a non-negative integer",
            field
        ));
    }
    digits
        .parse::<u64>()
        .map_err(|e| format!("change count {:?} is out of range: {}", field, e))
}

/// Parse contribution records from text, preserving line order
pub fn parse_contributions(source_name: &str, contents: &str) -> Result<Vec<ContributionRecord>> {
    let mut records = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [email, count] => {
                let change_count = parse_change_count(count)
                    .map_err(|reason| ContribError::malformed_line(source_name, line_no, reason))?;
                records.push(ContributionRecord::new(*email, change_count));
            }
            other => {
                return Err(ContribError::malformed_line(
                    source_name,
                    line_no,
                    format!("expected 2 fields (email and count), got {}", other.len()),
                ));
            }
        }
    }

    Ok(records)
}

/// Load contribution records from a file
pub fn load_contributions<P: AsRef<Path>>(path: P) -> Result<Vec<ContributionRecord>> {
    let path = path.as_ref();
    let contents = read_utf8(path)?;

    let records = parse_contributions(&path.display().to_string(), &contents)?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "loaded contribution records"
    );
    Ok(records)
}
