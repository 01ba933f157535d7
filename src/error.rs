//! Error taxonomy for the contribution report pipeline
//!
//! Every failure is fatal: the report is a one-shot batch, so a defect in
//! either input has to be fixed at the source and the run repeated.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, aggregating or reporting contributions
#[derive(Error, Debug)]
pub enum ContribError {
    /// An input source does not follow its format contract
    #[error("Malformed input in {source_name}{}: {reason}", line_suffix(.line))]
    MalformedInput {
        source_name: String,
        line: Option<usize>,
        reason: String,
    },

    /// A contribution email has no entry in the alias table
    #[error("Unmapped author: no alias entry for {email:?} (extend the alias table)")]
    UnmappedAuthor { email: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" (line {})", n),
        None => String::new(),
    }
}

impl ContribError {
    /// Build a `MalformedInput` error tied to a specific line
    pub fn malformed_line(
        source_name: impl Into<String>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            line: Some(line),
            reason: reason.into(),
        }
    }

    /// Build a `MalformedInput` error for a whole source
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            line: None,
            reason: reason.into(),
        }
    }
}

/// Result type for the report pipeline
pub type Result<T> = std::result::Result<T, ContribError>;
