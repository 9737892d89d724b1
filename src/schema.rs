//! Optional column information per table.
//!
//! Accepted alongside the table list but not consulted when resolving
//! questions yet.

use std::collections::BTreeMap;

/// Table name to its ordered column names.
pub type SchemaInfo = BTreeMap<String, Vec<String>>;

/// Split a comma-separated column list, trimming entries and dropping empty
/// ones. Case is kept.
pub fn parse_column_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

/// Split a comma-separated table list into trimmed, lowercased names.
pub fn parse_table_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
