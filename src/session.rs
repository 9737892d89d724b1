//! Interactive session state.
//!
//! The CLI and REPL own a [`Session`]: the configured tables and schema plus
//! an in-memory log of every question asked. The translation pipeline never
//! sees it.

use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{SqltokError, SqltokResult};
use crate::intent::Intent;
use crate::schema::SchemaInfo;
use crate::{Translation, translate};

/// Shown in [`QueryDetails`] for fields an intent doesn't have.
pub const NOT_APPLICABLE: &str = "N/A";

/// Width at which history listings cut queries off.
pub const HISTORY_QUERY_WIDTH: usize = 50;

/// One submitted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub query: String,
    pub sql: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
    pub success: bool,
}

impl HistoryEntry {
    /// Query text for listings: cut to [`HISTORY_QUERY_WIDTH`] chars plus
    /// `...` when longer.
    pub fn short_query(&self) -> String {
        if self.query.chars().count() > HISTORY_QUERY_WIDTH {
            let head: String = self.query.chars().take(HISTORY_QUERY_WIDTH).collect();
            format!("{}...", head)
        } else {
            self.query.clone()
        }
    }
}

/// Flat, display-ready summary of an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryDetails {
    pub intent: String,
    pub table: String,
    pub column: String,
    /// Filter value, else the city.
    pub filter: String,
}

impl From<&Intent> for QueryDetails {
    fn from(intent: &Intent) -> Self {
        let filter = match intent {
            Intent::FilterByColumn { value, .. } => value.as_str(),
            Intent::FilterByCity { city, .. } => city.as_str(),
            _ => NOT_APPLICABLE,
        };
        Self {
            intent: intent.kind().to_string(),
            table: intent.table().unwrap_or(NOT_APPLICABLE).to_string(),
            column: intent.column().unwrap_or(NOT_APPLICABLE).to_string(),
            filter: filter.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    tables: Vec<String>,
    schema: SchemaInfo,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(tables: Vec<String>, schema: SchemaInfo) -> Self {
        Self {
            tables,
            schema,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tables.clone(), config.schema.clone())
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn schema(&self) -> &SchemaInfo {
        &self.schema
    }

    /// All entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Translate `query` and log it.
    pub fn submit(&mut self, query: &str) -> Translation {
        let translation = translate(query, &self.tables, Some(&self.schema));
        let entry = HistoryEntry {
            query: query.to_string(),
            sql: translation.sql.clone(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            success: translation.is_success(),
        };
        debug!(
            query = %entry.query,
            intent = %translation.intent.kind(),
            success = entry.success,
            "query submitted"
        );
        self.history.push(entry);
        translation
    }

    /// The last `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev().take(n)
    }

    /// Re-submit the `index`th entry of `recent(n)`.
    pub fn reuse(&mut self, index: usize, n: usize) -> SqltokResult<Translation> {
        let query = self
            .recent(n)
            .nth(index)
            .map(|e| e.query.clone())
            .ok_or(SqltokError::InvalidHistoryIndex(index))?;
        Ok(self.submit(&query))
    }

    /// Record the column list for `table`, replacing any previous one.
    pub fn save_schema(&mut self, table: &str, columns: Vec<String>) {
        debug!(table, columns = columns.len(), "schema saved");
        self.schema.insert(table.to_lowercase(), columns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_config(&Config::default())
    }

    #[test]
    fn test_submit_logs_in_order() {
        let mut s = session();
        let t = s.submit("count users");
        assert!(t.is_success());
        s.submit("customers in paris");

        let history = s.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].query, "count users");
        assert_eq!(history[0].sql, "SELECT COUNT(*) as record_count\nFROM users;");
        assert!(history[0].success);
        assert_eq!(history[1].query, "customers in paris");
        assert!(!history[1].success);
    }

    #[test]
    fn test_timestamp_format() {
        let mut s = session();
        s.submit("count users");
        let ts = &s.history()[0].timestamp;
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }

    #[test]
    fn test_recent_newest_first() {
        let mut s = session();
        for q in ["show all users", "count orders", "top 5 sales"] {
            s.submit(q);
        }
        let recent: Vec<&str> = s.recent(2).map(|e| e.query.as_str()).collect();
        assert_eq!(recent, vec!["top 5 sales", "count orders"]);
        assert_eq!(s.recent(10).count(), 3);
    }

    #[test]
    fn test_reuse() {
        let mut s = session();
        s.submit("show all users");
        s.submit("count orders");
        let t = s.reuse(1, 5).unwrap();
        assert_eq!(t.sql, "SELECT *\nFROM users;");
        assert_eq!(s.history().len(), 3);

        assert!(matches!(
            s.reuse(9, 5),
            Err(SqltokError::InvalidHistoryIndex(9))
        ));
    }

    #[test]
    fn test_save_schema() {
        let mut s = session();
        s.save_schema("Users", vec!["id".into(), "email".into()]);
        assert_eq!(s.schema()["users"], vec!["id", "email"]);
    }

    #[test]
    fn test_short_query() {
        let entry = HistoryEntry {
            query: "x".repeat(60),
            sql: String::new(),
            timestamp: "12:00:00".into(),
            success: false,
        };
        assert_eq!(entry.short_query(), format!("{}...", "x".repeat(50)));

        let entry = HistoryEntry {
            query: "count users".into(),
            ..entry
        };
        assert_eq!(entry.short_query(), "count users");
    }

    #[test]
    fn test_query_details() {
        let details = QueryDetails::from(&Intent::FilterByCity {
            table: "customers".into(),
            city: "London".into(),
        });
        assert_eq!(
            details,
            QueryDetails {
                intent: "filter_by_city".into(),
                table: "customers".into(),
                column: "N/A".into(),
                filter: "London".into(),
            }
        );

        let details = QueryDetails::from(&Intent::Unknown {
            query: "hi".into(),
        });
        assert_eq!(details.table, NOT_APPLICABLE);
        assert_eq!(details.filter, NOT_APPLICABLE);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["Intent"], "unknown");
    }
}
