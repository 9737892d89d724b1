//! Error types for SQLtOK.
//!
//! Translation itself never fails: a question nothing recognizes comes back
//! as [`Intent::Unknown`](crate::intent::Intent::Unknown). These errors cover
//! the shell around it (config files, the REPL, JSON output).

use thiserror::Error;

/// The main error type for SQLtOK operations.
#[derive(Debug, Error)]
pub enum SqltokError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid TOML.
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor failure.
    #[error("REPL error: {0}")]
    Repl(String),

    /// `.reuse N` pointed past the visible history.
    #[error("No history entry #{0}")]
    InvalidHistoryIndex(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqltokError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for SQLtOK operations.
pub type SqltokResult<T> = Result<T, SqltokError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqltokError::config("tables must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: tables must not be empty"
        );
    }

    #[test]
    fn test_history_index_display() {
        assert_eq!(
            SqltokError::InvalidHistoryIndex(7).to_string(),
            "No history entry #7"
        );
    }
}
