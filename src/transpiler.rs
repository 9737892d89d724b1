//! SQL rendering for resolved intents.
//!
//! Identifiers and literals are interpolated exactly as captured: nothing is
//! quoted, escaped or validated.

use crate::intent::{AggregateFunc, Intent};

/// Rendered for [`Intent::Unknown`].
pub const UNABLE_TO_GENERATE: &str = "-- Unable to generate SQL. Please refine your query.";

/// Trait for converting intents to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

impl ToSql for Intent {
    fn to_sql(&self) -> String {
        match self {
            Intent::ShowAll { table } => format!("SELECT *\nFROM {};", table),
            Intent::CountRecords { table } => {
                format!("SELECT COUNT(*) as record_count\nFROM {};", table)
            }
            Intent::CalculateSum { table, column } => aggregate_sql(AggregateFunc::Sum, table, column),
            Intent::CalculateAvg { table, column } => aggregate_sql(AggregateFunc::Avg, table, column),
            Intent::CalculateMax { table, column } => aggregate_sql(AggregateFunc::Max, table, column),
            Intent::CalculateMin { table, column } => aggregate_sql(AggregateFunc::Min, table, column),
            Intent::FilterByCity { table, city } => {
                format!("SELECT *\nFROM {}\nWHERE city = '{}';", table, city)
            }
            Intent::FilterByColumn {
                table,
                column,
                value,
            } => format!("SELECT *\nFROM {}\nWHERE {} = '{}';", table, column, value),
            Intent::OrderBy { table, column } => {
                format!("SELECT *\nFROM {}\nORDER BY {};", table, column)
            }
            Intent::Limit { table, limit } => format!("SELECT *\nFROM {}\nLIMIT {};", table, limit),
            Intent::Unknown { .. } => UNABLE_TO_GENERATE.to_string(),
        }
    }
}

/// `SELECT SUM(amount) as total_amount` and friends.
fn aggregate_sql(func: AggregateFunc, table: &str, column: &str) -> String {
    format!(
        "SELECT {}({}) as {}_{}\nFROM {};",
        func,
        column,
        func.alias_prefix(),
        column,
        table
    )
}
