//! Intent resolution.
//!
//! Walks the [`PatternTable`] first-match-wins and turns the captured groups
//! into an [`Intent`]. Never fails: anything unrecognized becomes
//! [`Intent::Unknown`].

use tracing::{debug, trace};

use crate::infer::{detect_table, infer_table_from_column};
use crate::intent::{Intent, IntentKind};
use crate::patterns::{PatternMatch, PatternTable};
use crate::schema::SchemaInfo;

/// Cities recognized by the `customers in ...` fallback.
const FALLBACK_CITIES: &[(&str, &str)] = &[("new york", "New York"), ("london", "London")];

/// Table targeted by the city fallback.
const FALLBACK_CITY_TABLE: &str = "customers";

/// Resolve a natural-language question against the known tables.
///
/// `schema` is accepted for callers that have it but does not influence the
/// result.
pub fn resolve(query: &str, tables: &[String], _schema: Option<&SchemaInfo>) -> Intent {
    let query = query.trim().to_lowercase();

    for hit in PatternTable::global().matches(&query) {
        let detected = detect_table(&query, tables);
        match build_intent(&hit, tables, detected) {
            Some(intent) => {
                debug!(
                    kind = %hit.kind,
                    pattern = hit.pattern,
                    groups = ?hit.groups,
                    "pattern matched"
                );
                return intent;
            }
            None => trace!(kind = %hit.kind, pattern = hit.pattern, "match did not branch"),
        }
    }

    if let Some(intent) = city_fallback(&query) {
        debug!(query = %query, "city fallback matched");
        return intent;
    }

    trace!(query = %query, "no pattern matched");
    Intent::Unknown { query }
}

/// Assign captured groups to fields for the matched intent.
///
/// `None` means this match doesn't produce a record and the walk goes on.
fn build_intent(hit: &PatternMatch<'_>, tables: &[String], detected: Option<&str>) -> Option<Intent> {
    let groups = &hit.groups;
    match hit.kind {
        IntentKind::ShowAll => Some(Intent::ShowAll {
            table: captured_or_detected(groups.first()?, tables, detected),
        }),
        IntentKind::CountRecords => Some(Intent::CountRecords {
            table: captured_or_detected(groups.first()?, tables, detected),
        }),
        IntentKind::FilterByColumn => match groups.as_slice() {
            [table, column, value, ..] => Some(Intent::FilterByColumn {
                table: table.to_string(),
                column: column.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        },
        IntentKind::CalculateSum
        | IntentKind::CalculateAvg
        | IntentKind::CalculateMax
        | IntentKind::CalculateMin => {
            let column = groups.first()?.to_string();
            let table = match detected {
                Some(table) => table.to_string(),
                None => infer_table_from_column(&column, tables),
            };
            Intent::aggregate(hit.kind, table, column)
        }
        IntentKind::OrderBy => match groups.as_slice() {
            [table, column, ..] => Some(Intent::OrderBy {
                table: table.to_string(),
                column: column.to_string(),
            }),
            _ => None,
        },
        IntentKind::Limit => match groups.as_slice() {
            [limit, table, ..] => Some(Intent::Limit {
                table: table.to_string(),
                limit: limit.to_string(),
            }),
            _ => None,
        },
        IntentKind::FilterByCity | IntentKind::Unknown => None,
    }
}

/// The captured name if it is a known table, else the detected table, else
/// the captured name anyway.
fn captured_or_detected(captured: &str, tables: &[String], detected: Option<&str>) -> String {
    if tables.iter().any(|t| t == captured) {
        return captured.to_string();
    }
    detected.unwrap_or(captured).to_string()
}

fn city_fallback(query: &str) -> Option<Intent> {
    if !query.contains("customers in") {
        return None;
    }
    FALLBACK_CITIES
        .iter()
        .find(|(needle, _)| query.contains(needle))
        .map(|(_, city)| Intent::FilterByCity {
            table: FALLBACK_CITY_TABLE.to_string(),
            city: city.to_string(),
        })
}
