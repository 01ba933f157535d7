//! contribshare - per-author share of code changes
//!
//! Loads a hand-curated alias table (email -> canonical name) and a
//! two-column contribution file (email, change count), merges every
//! author's aliases, and reports each author's percentage of all changes.

pub mod aggregate;
pub mod alias;
pub mod cli;
pub mod config;
pub mod contributions;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod pipeline;
pub mod report;
pub mod source;
