use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
///
/// Read from environment variables, optionally seeded from a `.env` file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string; the in-memory store is used when unset
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Base URL of the external user and team directory
    pub directory_base_url: String,
    pub directory_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 5,
            directory_base_url: "http://localhost:8081".to_string(),
            directory_timeout: Duration::from_secs(10),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            database_max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                non_empty("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            directory_base_url: non_empty("DIRECTORY_BASE_URL")
                .unwrap_or(defaults.directory_base_url),
            directory_timeout: Duration::from_secs(parse(
                "DIRECTORY_TIMEOUT_SECS",
                non_empty("DIRECTORY_TIMEOUT_SECS"),
                defaults.directory_timeout.as_secs(),
            )?),
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: parse("PORT", non_empty("PORT"), defaults.port)?,
        })
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let value = format!("{}:{}", self.host, self.port);
        value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name: "HOST", value })
    }
}

fn parse<T: FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}
