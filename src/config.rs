//! Configuration: known tables, optional schema info and shell settings.
//!
//! Looked up in order: an explicit path, `./sqltok.toml`, then
//! `<config dir>/sqltok/config.toml`. With no file at all the defaults apply.
//!
//! ```toml
//! tables = ["products", "users", "orders"]
//! suggestion_tables = 3
//!
//! [schema]
//! users = ["id", "name", "email", "created_at"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SqltokError, SqltokResult};
use crate::schema::{SchemaInfo, parse_table_list};

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sqltok.toml";

/// Table list used when none is configured.
pub const DEFAULT_TABLES: &str = "products,users,orders,customers,sales,employees";

/// How many tables the example picker draws from by default.
pub const DEFAULT_SUGGESTION_TABLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Known table names, lowercase, in priority order.
    pub tables: Vec<String>,
    /// Optional column lists per table.
    pub schema: SchemaInfo,
    /// Number of leading tables used for example questions.
    pub suggestion_tables: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: parse_table_list(DEFAULT_TABLES),
            schema: SchemaInfo::new(),
            suggestion_tables: DEFAULT_SUGGESTION_TABLES,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// A missing `path` is an error; missing default locations are not.
    pub fn load(path: Option<&Path>) -> SqltokResult<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(SqltokError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match Self::default_paths().into_iter().find(|p| p.exists()) {
            Some(found) => Self::from_file(&found),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Candidate config locations, most specific first.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqltok").join("config.toml"));
        }
        paths
    }

    pub fn from_file(path: &Path) -> SqltokResult<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML and normalize table names.
    pub fn from_toml_str(content: &str) -> SqltokResult<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.tables = parse_table_list(&config.tables.join(","));
        Ok(config)
    }

    /// Replace the table list from a comma-separated string.
    pub fn with_tables(mut self, tables: &str) -> Self {
        self.tables = parse_table_list(tables);
        self
    }

    /// Tables the example picker draws from.
    pub fn suggestion_tables(&self) -> &[String] {
        let n = self.suggestion_tables.min(self.tables.len());
        &self.tables[..n]
    }
}
