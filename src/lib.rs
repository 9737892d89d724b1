//! # SQLtOK — plain English in, SQL out
//!
//! A rule-based translator for short questions about tabular data. A fixed,
//! ordered table of regular expressions recognizes what is being asked,
//! picks out the table, column and literal, and renders an SQL statement
//! plus a one-line explanation.
//!
//! ## Quick Example
//!
//! ```
//! let tables = vec!["products".to_string(), "users".to_string()];
//! let t = sqltok::translate("show all products", &tables, None);
//!
//! assert_eq!(t.sql, "SELECT *\nFROM products;");
//! assert_eq!(t.intent.kind().as_str(), "show_all");
//! ```
//!
//! ## Recognized questions
//!
//! | Intent             | Example                          | SQL                         |
//! |--------------------|----------------------------------|-----------------------------|
//! | `show_all`         | show all products                | `SELECT * FROM ...`         |
//! | `count_records`    | how many users                   | `COUNT(*)`                  |
//! | `filter_by_column` | find users where role is admin   | `WHERE role = 'admin'`      |
//! | `calculate_sum`    | total amount                     | `SUM(amount)`               |
//! | `calculate_avg`    | average price                    | `AVG(price)`                |
//! | `calculate_max`    | highest salary                   | `MAX(salary)`               |
//! | `calculate_min`    | lowest age                       | `MIN(age)`                  |
//! | `order_by`         | sort employees by salary         | `ORDER BY salary`           |
//! | `limit`            | top 10 orders                    | `LIMIT 10`                  |
//! | `filter_by_city`   | customers in london              | `WHERE city = 'London'`     |
//!
//! Anything else resolves to `unknown`; translation itself never fails.

use serde::Serialize;

pub mod config;
pub mod error;
pub mod explain;
pub mod infer;
pub mod intent;
pub mod patterns;
pub mod resolver;
pub mod schema;
pub mod session;
pub mod suggest;
pub mod transpiler;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::*;
    pub use crate::explain::Explain;
    pub use crate::intent::{AggregateFunc, Intent, IntentKind};
    pub use crate::resolver::resolve;
    pub use crate::schema::SchemaInfo;
    pub use crate::session::{HistoryEntry, QueryDetails, Session};
    pub use crate::suggest::suggestions;
    pub use crate::transpiler::ToSql;
    pub use crate::{Translation, translate};
}

use error::SqltokResult;
use explain::Explain;
use intent::Intent;
use schema::SchemaInfo;
use transpiler::ToSql;

/// A resolved question with its SQL and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub intent: Intent,
    pub sql: String,
    pub explanation: String,
}

impl Translation {
    /// Whether any rule recognized the question.
    pub fn is_success(&self) -> bool {
        !self.intent.is_unknown()
    }

    /// Pretty-printed JSON, as written by `--format json`.
    pub fn to_json(&self) -> SqltokResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Intent> for Translation {
    fn from(intent: Intent) -> Self {
        Self {
            sql: intent.to_sql(),
            explanation: intent.explain(),
            intent,
        }
    }
}

/// Resolve a question and render it.
///
/// # Example
///
/// ```
/// let tables = vec!["sales".to_string(), "orders".to_string()];
/// let t = sqltok::translate("average amount", &tables, None);
/// assert_eq!(t.sql, "SELECT AVG(amount) as avg_amount\nFROM sales;");
/// ```
pub fn translate(query: &str, tables: &[String], schema: Option<&SchemaInfo>) -> Translation {
    resolver::resolve(query, tables, schema).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_unknown() {
        let t = translate("customers in paris", &["customers".to_string()], None);
        assert!(!t.is_success());
        assert_eq!(t.sql, transpiler::UNABLE_TO_GENERATE);
        assert_eq!(t.explanation, explain::CANNOT_EXPLAIN);
    }

    #[test]
    fn test_translate_serializes() {
        let t = translate("count users", &["users".to_string()], None);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["intent"]["intent"], "count_records");
        assert_eq!(json["intent"]["table"], "users");
        assert_eq!(json["sql"], "SELECT COUNT(*) as record_count\nFROM users;");
    }

    #[test]
    fn test_to_json() {
        let t = translate("top 5 orders", &["orders".to_string()], None);
        let text = t.to_json().unwrap();
        assert!(text.contains("\n  \"intent\": {"));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["intent"]["intent"], "limit");
        assert_eq!(json["intent"]["limit"], "5");
        assert_eq!(json["sql"], "SELECT *\nFROM orders\nLIMIT 5;");
    }
}
