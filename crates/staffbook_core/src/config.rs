//! Process configuration read from `STAFFBOOK_*` environment variables.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `STAFFBOOK_DB_PATH` | SQLite file to open | in-memory database |
//! | `STAFFBOOK_LOG_LEVEL` | `trace`..`error` | `default_log_level()` |
//! | `STAFFBOOK_LOG_DIR` | absolute directory for rolling logs | file logging off |
//!
//! Blank values count as unset.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use rusqlite::Connection;
use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_VAR: &str = "STAFFBOOK_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "STAFFBOOK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "STAFFBOOK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Logging {
        var: &'static str,
        #[source]
        source: LoggingError,
    },
}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: Option<PathBuf>,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_level = match read(LOG_LEVEL_VAR) {
            Some(level) => normalize_level(&level).map_err(|source| ConfigError::Logging {
                var: LOG_LEVEL_VAR,
                source,
            })?,
            None => default_log_level(),
        };

        let log_dir = match read(LOG_DIR_VAR) {
            Some(dir) => Some(normalize_log_dir(&PathBuf::from(dir)).map_err(|source| {
                ConfigError::Logging {
                    var: LOG_DIR_VAR,
                    source,
                }
            })?),
            None => None,
        };

        Ok(Self {
            db_path: read(DB_PATH_VAR).map(PathBuf::from),
            log_level,
            log_dir,
        })
    }

    /// Opens the configured database, or a fresh in-memory one.
    pub fn open_connection(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}
