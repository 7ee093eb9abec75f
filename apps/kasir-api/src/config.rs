//! Kasir API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads an optional `.env` file first.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use kasir_db::{DbConfig, PgSslMode};

/// Kasir API configuration.
#[derive(Debug, Clone)]
pub struct KasirConfig {
    /// Bind address (`SERVER_HOST`)
    pub server_host: String,

    /// Listening port (`SERVER_PORT`)
    pub server_port: u16,

    /// Shown by the health endpoint (`APP_NAME`)
    pub app_name: String,

    /// `APP_VERSION`
    pub app_version: String,

    /// `APP_ENVIRONMENT`, e.g. development or production
    pub app_environment: String,

    /// Per-request deadline (`REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,

    /// PostgreSQL connection settings
    pub database: DbConfig,
}

impl KasirConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let mut database = DbConfig::new()
            .host(or("DB_HOST", "localhost"))
            .port(parse(&get, "DB_PORT", 5432)?)
            .user(or("DB_USER", "postgres"))
            .password(lookup("DB_PASSWORD").unwrap_or_default())
            .database(or("DB_NAME", "kasir"))
            .max_connections(parse(&get, "DB_MAX_CONNECTIONS", 10)?);

        let ssl_mode = or("DB_SSLMODE", "disable");
        database = database.ssl_mode(
            PgSslMode::from_str(&ssl_mode)
                .map_err(|_| ConfigError::InvalidValue("DB_SSLMODE".to_string()))?,
        );

        if let Some(url) = get("DATABASE_URL") {
            database = database.url(url);
        }

        let timeout_secs: u64 = parse(&get, "REQUEST_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string()));
        }

        Ok(KasirConfig {
            server_host: or("SERVER_HOST", "0.0.0.0"),
            server_port: parse(&get, "SERVER_PORT", 8080)?,
            app_name: or("APP_NAME", "Kasir API"),
            app_version: or("APP_VERSION", "1.0"),
            app_environment: or("APP_ENVIRONMENT", "development"),
            request_timeout: Duration::from_secs(timeout_secs),
            database,
        })
    }

    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
