//! Intent records.
//!
//! An [`Intent`] is what a question resolves to: the kind of statement being
//! asked for plus the identifiers and literals needed to render it. Each
//! variant carries only its own fields.

use serde::Serialize;

/// The closed set of intent kinds, in the names used for display and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    ShowAll,
    CountRecords,
    FilterByColumn,
    CalculateSum,
    CalculateAvg,
    CalculateMax,
    CalculateMin,
    OrderBy,
    Limit,
    FilterByCity,
    Unknown,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::ShowAll => "show_all",
            IntentKind::CountRecords => "count_records",
            IntentKind::FilterByColumn => "filter_by_column",
            IntentKind::CalculateSum => "calculate_sum",
            IntentKind::CalculateAvg => "calculate_avg",
            IntentKind::CalculateMax => "calculate_max",
            IntentKind::CalculateMin => "calculate_min",
            IntentKind::OrderBy => "order_by",
            IntentKind::Limit => "limit",
            IntentKind::FilterByCity => "filter_by_city",
            IntentKind::Unknown => "unknown",
        }
    }

    /// Aggregate function for the `calculate_*` kinds.
    pub fn aggregate(&self) -> Option<AggregateFunc> {
        match self {
            IntentKind::CalculateSum => Some(AggregateFunc::Sum),
            IntentKind::CalculateAvg => Some(AggregateFunc::Avg),
            IntentKind::CalculateMax => Some(AggregateFunc::Max),
            IntentKind::CalculateMin => Some(AggregateFunc::Min),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate functions a question can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Sum,
    Avg,
    Max,
    Min,
}

impl AggregateFunc {
    /// Prefix of the result column alias (`total_amount`, `avg_price`, ...).
    pub fn alias_prefix(&self) -> &'static str {
        match self {
            AggregateFunc::Sum => "total",
            AggregateFunc::Avg => "avg",
            AggregateFunc::Max => "max",
            AggregateFunc::Min => "min",
        }
    }
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunc::Sum => write!(f, "SUM"),
            AggregateFunc::Avg => write!(f, "AVG"),
            AggregateFunc::Max => write!(f, "MAX"),
            AggregateFunc::Min => write!(f, "MIN"),
        }
    }
}

/// A resolved question.
///
/// Serializes internally tagged, e.g.
/// `{"intent":"limit","table":"orders","limit":"10"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    ShowAll {
        table: String,
    },
    CountRecords {
        table: String,
    },
    FilterByColumn {
        table: String,
        column: String,
        value: String,
    },
    CalculateSum {
        table: String,
        column: String,
    },
    CalculateAvg {
        table: String,
        column: String,
    },
    CalculateMax {
        table: String,
        column: String,
    },
    CalculateMin {
        table: String,
        column: String,
    },
    FilterByCity {
        table: String,
        city: String,
    },
    OrderBy {
        table: String,
        column: String,
    },
    /// `limit` is the captured digit run, never parsed.
    Limit {
        table: String,
        limit: String,
    },
    /// Nothing matched; carries the normalized query.
    Unknown {
        query: String,
    },
}

impl Intent {
    /// Build one of the `calculate_*` intents for `kind`.
    ///
    /// Returns `None` when `kind` is not an aggregate kind.
    pub fn aggregate(kind: IntentKind, table: String, column: String) -> Option<Self> {
        let intent = match kind.aggregate()? {
            AggregateFunc::Sum => Intent::CalculateSum { table, column },
            AggregateFunc::Avg => Intent::CalculateAvg { table, column },
            AggregateFunc::Max => Intent::CalculateMax { table, column },
            AggregateFunc::Min => Intent::CalculateMin { table, column },
        };
        Some(intent)
    }

    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::ShowAll { .. } => IntentKind::ShowAll,
            Intent::CountRecords { .. } => IntentKind::CountRecords,
            Intent::FilterByColumn { .. } => IntentKind::FilterByColumn,
            Intent::CalculateSum { .. } => IntentKind::CalculateSum,
            Intent::CalculateAvg { .. } => IntentKind::CalculateAvg,
            Intent::CalculateMax { .. } => IntentKind::CalculateMax,
            Intent::CalculateMin { .. } => IntentKind::CalculateMin,
            Intent::FilterByCity { .. } => IntentKind::FilterByCity,
            Intent::OrderBy { .. } => IntentKind::OrderBy,
            Intent::Limit { .. } => IntentKind::Limit,
            Intent::Unknown { .. } => IntentKind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Intent::Unknown { .. })
    }

    /// Target table, if the intent has one.
    pub fn table(&self) -> Option<&str> {
        match self {
            Intent::ShowAll { table }
            | Intent::CountRecords { table }
            | Intent::FilterByColumn { table, .. }
            | Intent::CalculateSum { table, .. }
            | Intent::CalculateAvg { table, .. }
            | Intent::CalculateMax { table, .. }
            | Intent::CalculateMin { table, .. }
            | Intent::FilterByCity { table, .. }
            | Intent::OrderBy { table, .. }
            | Intent::Limit { table, .. } => Some(table),
            Intent::Unknown { .. } => None,
        }
    }

    /// Column being aggregated, filtered or ordered.
    pub fn column(&self) -> Option<&str> {
        match self {
            Intent::FilterByColumn { column, .. }
            | Intent::CalculateSum { column, .. }
            | Intent::CalculateAvg { column, .. }
            | Intent::CalculateMax { column, .. }
            | Intent::CalculateMin { column, .. }
            | Intent::OrderBy { column, .. } => Some(column),
            _ => None,
        }
    }
}
