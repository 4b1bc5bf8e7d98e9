//! Panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ALMACEN_HOST` - Bind address (default: 127.0.0.1)
//! - `ALMACEN_PORT` - Listen port (default: 3002)
//! - `ALMACEN_STORE_PATH` - JSON file backing the store; when unset the
//!   store lives in memory and is lost on restart
//! - `ALMACEN_STATIC_DIR` - Stylesheet directory (default: crates/panel/static)
//! - `ALMACEN_LOG_JSON` - Emit JSON log lines when `true` or `1`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::store::{FileStore, JsonStore, StoreError};

const DEFAULT_STATIC_DIR: &str = "crates/panel/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Panel application configuration.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// File backing the store, if any
    pub store_path: Option<PathBuf>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// JSON log output
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

impl PanelConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = parse_var("ALMACEN_HOST", get("ALMACEN_HOST"), "127.0.0.1".parse().ok())?;
        let port = parse_var("ALMACEN_PORT", get("ALMACEN_PORT"), Some(3002))?;
        let static_dir = get("ALMACEN_STATIC_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let log_json = get("ALMACEN_LOG_JSON").is_some_and(|v| is_truthy(&v));
        let sentry_sample_rate =
            parse_var("SENTRY_SAMPLE_RATE", get("SENTRY_SAMPLE_RATE"), Some(1.0))?;
        let sentry_traces_sample_rate =
            parse_var("SENTRY_TRACES_SAMPLE_RATE", get("SENTRY_TRACES_SAMPLE_RATE"), Some(0.0))?;

        Ok(Self {
            host,
            port,
            store_path: get("ALMACEN_STORE_PATH").map(PathBuf::from),
            static_dir,
            log_json,
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Open the configured store: the file store when a path is set,
    /// otherwise a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn open_store(&self) -> Result<JsonStore, StoreError> {
        match &self.store_path {
            Some(path) => Ok(JsonStore::new(Arc::new(FileStore::open(path.clone())?))),
            None => Ok(JsonStore::in_memory()),
        }
    }
}

/// Parse `value` for `key`, falling back to `default` when unset.
fn parse_var<T>(key: &str, value: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => default.ok_or_else(|| ConfigError::MissingEnvVar(key.to_string())),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<PanelConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        PanelConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3002");
        assert!(config.store_path.is_none());
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ALMACEN_HOST", "0.0.0.0"),
            ("ALMACEN_PORT", "8080"),
            ("ALMACEN_STORE_PATH", "/tmp/almacen.json"),
            ("ALMACEN_LOG_JSON", "true"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/almacen.json")));
        assert!(config.log_json);
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("ALMACEN_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3002);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("ALMACEN_PORT", "puerto")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ALMACEN_PORT"));
    }

    #[test]
    fn test_open_store_in_memory_by_default() {
        let store = config_from(&[]).unwrap().open_store().unwrap();
        assert!(store.backend().keys().is_empty());
    }

    #[test]
    fn test_open_store_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("almacen.json");
        let config = config_from(&[("ALMACEN_STORE_PATH", path.to_str().unwrap())]).unwrap();

        let store = config.open_store().unwrap();
        store.backend().set_item("empleados", "[]".to_string()).unwrap();
        assert!(path.exists());
    }
}
