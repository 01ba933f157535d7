//! Per-author aggregation of contribution records
//!
//! Each record's email is resolved to a canonical name through the alias
//! table, records sharing a canonical name are summed, and every group's
//! share of the grand total is computed. Output order is unspecified;
//! sorting belongs to the reporter.

use crate::alias::AliasTable;
use crate::contributions::ContributionRecord;
use crate::error::{ContribError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// What to do with a contribution email that has no alias entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnmappedPolicy {
    /// Fail with `UnmappedAuthor` (default)
    #[default]
    Reject,
    /// Report the raw email as its own author
    KeepEmail,
}

/// Summary for one canonical author
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedContribution {
    pub canonical_name: String,
    pub total_changes: u64,
    /// Fraction of the grand total, in `[0, 1]`
    pub percent_of_total: f64,
}

/// Running totals keyed by canonical name
#[derive(Debug)]
pub struct ContributionTally {
    /// Labels overflow errors
    source_name: String,
    totals: HashMap<String, u64>,
}

impl ContributionTally {
    /// Tally for records read from `source_name`
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            totals: HashMap::new(),
        }
    }

    /// Add a change count to an author's running total
    pub fn record(&mut self, canonical_name: &str, change_count: u64) -> Result<()> {
        let current = self.totals.get(canonical_name).copied().unwrap_or(0);
        let total = current
            .checked_add(change_count)
            .ok_or_else(|| self.overflow(canonical_name))?;
        self.totals.insert(canonical_name.to_string(), total);
        Ok(())
    }

    /// Totals per canonical name
    pub fn totals(&self) -> &HashMap<String, u64> {
        &self.totals
    }

    /// Sum of all author totals
    pub fn grand_total(&self) -> Result<u64> {
        self.totals
            .values()
            .try_fold(0u64, |acc, &n| acc.checked_add(n))
            .ok_or_else(|| self.overflow("all authors"))
    }

    /// Convert the running totals into aggregates with their shares
    ///
    /// An empty or all-zero tally yields no aggregates; no division is
    /// attempted.
    pub fn into_aggregates(self) -> Result<Vec<AggregatedContribution>> {
        let grand_total = self.grand_total()?;
        if grand_total == 0 {
            return Ok(Vec::new());
        }

        Ok(self
            .totals
            .into_iter()
            .map(|(canonical_name, total_changes)| AggregatedContribution {
                canonical_name,
                total_changes,
                percent_of_total: total_changes as f64 / grand_total as f64,
            })
            .collect())
    }

    fn overflow(&self, what: &str) -> ContribError {
        ContribError::malformed(
            self.source_name.as_str(),
            format!("total change count for {} overflows", what),
        )
    }
}

/// Resolve, group and sum contribution records by canonical author
///
/// `source_name` is the contribution source the records came from.
///
/// Under `KeepEmail` the raw email becomes the grouping key, so an unmapped
/// email that happens to equal a canonical name is summed into that author.
/// A warning is logged when that happens.
pub fn aggregate(
    source_name: &str,
    aliases: &AliasTable,
    records: &[ContributionRecord],
    policy: UnmappedPolicy,
) -> Result<Vec<AggregatedContribution>> {
    let mut tally = ContributionTally::new(source_name);
    let mut kept_unmapped: HashSet<&str> = HashSet::new();

    for record in records {
        let canonical_name = match (aliases.resolve(&record.email), policy) {
            (Some(name), _) => name,
            (None, UnmappedPolicy::Reject) => {
                return Err(ContribError::UnmappedAuthor {
                    email: record.email.clone(),
                });
            }
            (None, UnmappedPolicy::KeepEmail) => {
                if kept_unmapped.insert(record.email.as_str()) {
                    tracing::warn!(email = %record.email, "no alias entry, reporting raw email");
                    if aliases.canonical_names().contains(record.email.as_str()) {
                        tracing::warn!(
                            email = %record.email,
                            "raw email equals a canonical name, merging into that author"
                        );
                    }
                }
                record.email.as_str()
            }
        };
        tally.record(canonical_name, record.change_count)?;
    }

    tracing::debug!(
        records = records.len(),
        authors = tally.totals().len(),
        "aggregated contributions"
    );
    tally.into_aggregates()
}
