//! Alias table loading
//!
//! The alias table is a hand-maintained JSON object mapping every known
//! email address of a contributor to one canonical display name:
//!
//! ```json
//! {
//!     "alice@example.org": "Alice Liddell",
//!     "alice@users.noreply.github.com": "Alice Liddell",
//!     "bob@example.org": "Bob Sánchez"
//! }
//! ```
//!
//! Keys are unique. Duplicate keys, empty keys or names, and non-string
//! values are rejected when the table is built.

use crate::error::{ContribError, Result};
use crate::source::read_utf8;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

/// A single alias: one raw email resolving to a canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub email: String,
    pub canonical_name: String,
}

impl AliasEntry {
    pub fn new(email: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            canonical_name: canonical_name.into(),
        }
    }
}

/// Immutable lookup from email to canonical author name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Build a table from explicit entries
    ///
    /// `source_name` only labels errors (e.g. "built-in aliases").
    pub fn from_entries<I>(source_name: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = AliasEntry>,
    {
        let mut table = Self::default();
        for entry in entries {
            table
                .insert(entry.email, entry.canonical_name)
                .map_err(|reason| ContribError::malformed(source_name, reason))?;
        }
        Ok(table)
    }

    /// Parse a table from JSON text (a file's contents or an embedded literal)
    pub fn from_json_str(source_name: &str, contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| ContribError::malformed(source_name, e.to_string()))
    }

    /// Load and parse an alias table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_utf8(path)?;

        let table = Self::from_json_str(&path.display().to_string(), &contents)?;
        tracing::debug!(
            path = %path.display(),
            aliases = table.len(),
            authors = table.canonical_names().len(),
            "loaded alias table"
        );
        Ok(table)
    }

    /// Canonical name for an email, exact and case-sensitive
    pub fn resolve(&self, email: &str) -> Option<&str> {
        self.aliases.get(email).map(String::as_str)
    }

    /// Number of aliased emails
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Distinct canonical names, sorted
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.aliases.values().map(String::as_str).collect()
    }

    fn insert(&mut self, email: String, canonical_name: String) -> std::result::Result<(), String> {
        if email.is_empty() {
            return Err("alias key must be a non-empty email".to_string());
        }
        if canonical_name.trim().is_empty() {
            return Err(format!("alias {:?} maps to an empty name", email));
        }
        if self.aliases.contains_key(&email) {
            return Err(format!("duplicate alias entry for {:?}", email));
        }
        self.aliases.insert(email, canonical_name);
        Ok(())
    }
}

impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AliasTableVisitor)
    }
}

struct AliasTableVisitor;

impl<'de> Visitor<'de> for AliasTableVisitor {
    type Value = AliasTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping email addresses to author names")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = AliasTable::default();
        while let Some(email) = map.next_key::<String>()? {
            let canonical_name: String = map.next_value()?;
            table
                .insert(email, canonical_name)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(table)
    }
}
