//! Server configuration from process environment.
//!
//! # Responsibility
//! - Resolve database path, listening port, and logging settings.
//! - Fail startup on malformed values instead of guessing.
//!
//! # Invariants
//! - Every setting has a development-friendly default.
//! - `PORT` must parse as a valid TCP port when set.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_DB_PATH: &str = "postit.sqlite3";
const DEFAULT_PORT: u16 = 10000;

/// In-memory store marker accepted in `POSTIT_DB`.
const MEMORY_DB_MARKER: &str = ":memory:";

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database path, or `:memory:` for an ephemeral store.
    pub database_path: String,
    /// TCP port the HTTP listener binds to.
    pub port: u16,
    /// Log level passed to the core logging bootstrap.
    pub log_level: String,
    /// Optional absolute directory for rolling log files; stderr when
    /// unset.
    pub log_dir: Option<String>,
}

/// Configuration failure raised before anything else starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(raw) => {
                write!(f, "PORT must be a TCP port number, got `{raw}`")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads settings from the process environment.
    ///
    /// - `POSTIT_DB`: database path (default `postit.sqlite3`).
    /// - `PORT`: listening port (default 10000).
    /// - `POSTIT_LOG`: log level (default per build mode).
    /// - `POSTIT_LOG_DIR`: log file directory (default stderr logging).
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path =
            env::var("POSTIT_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("POSTIT_LOG")
            .unwrap_or_else(|_| postit_core::default_log_level().to_string());

        let log_dir = env::var("POSTIT_LOG_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            database_path,
            port,
            log_level,
            log_dir,
        })
    }

    /// Returns whether the configured store is the in-memory marker.
    pub fn wants_memory_store(&self) -> bool {
        self.database_path == MEMORY_DB_MARKER
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_port, ConfigError};

    #[test]
    fn parse_port_accepts_valid_values() {
        assert_eq!(parse_port("10000").unwrap(), 10000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn parse_port_rejects_garbage() {
        let err = parse_port("not-a-port").unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("not-a-port".to_string()));

        assert!(parse_port("70000").is_err());
        assert!(parse_port("").is_err());
    }
}
