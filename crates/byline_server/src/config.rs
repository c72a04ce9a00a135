//! Server configuration from environment variables.
//!
//! Every setting has a default so a bare `byline_server` start works
//! for local use; deployments override via `BYLINE_*` variables.

use byline_core::{default_log_level, DEFAULT_EMAIL_DOMAIN};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file; the durable store shared by all workers.
    pub db_path: PathBuf,
    /// Bound on how long storage operations wait on a locked database.
    pub busy_timeout: Duration,
    /// Accepted email domain for author resolution.
    pub email_domain: String,
    pub log_dir: PathBuf,
    pub log_level: String,
}

/// Environment variable could not be interpreted.
#[derive(Debug)]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value `{}` for {}", self.value, self.key)
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Loads configuration from the environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("BYLINE_HOST", "127.0.0.1"),
            port: parse_env("BYLINE_PORT", 8080)?,
            db_path: PathBuf::from(env_or("BYLINE_DB_PATH", "byline.sqlite3")),
            busy_timeout: Duration::from_secs(parse_env("BYLINE_BUSY_TIMEOUT_SECS", 5)?),
            email_domain: env_or("BYLINE_EMAIL_DOMAIN", DEFAULT_EMAIL_DOMAIN),
            log_dir: PathBuf::from(env_or("BYLINE_LOG_DIR", "logs")),
            log_level: env_or("BYLINE_LOG_LEVEL", default_log_level()),
        })
    }
}

fn env_or(key: &'static str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| ConfigError { key, value })
        }
        _ => Ok(default),
    }
}
