//! Environment configuration.

use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Default proxy base URL used when `ALIMTALK_PROXY_URL` is not set.
pub static DEFAULT_PROXY_URL: &str = "http://localhost:3005";
/// Default base URL used to build invite links when `PUBLIC_BASE_URL` is not set.
pub static DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
/// Default HTTP listen address.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Default proxy request timeout in seconds.
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Base URL of the alimtalk/SMS proxy, without trailing slash
    pub proxy_url: String,
    /// Timeout applied to every proxy request
    pub proxy_timeout: Duration,
    /// Public base URL of the web frontend, without trailing slash
    pub public_base_url: String,
    /// Address the HTTP server binds to
    pub bind_address: String,
}

impl Config {
    /// Reads configuration from environment variables, applying defaults for optional ones.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PROXY_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let proxy_url = env_or("ALIMTALK_PROXY_URL", DEFAULT_PROXY_URL);
        let public_base_url = env_or("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL);
        let bind_address = env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);

        let proxy_timeout = match std::env::var("PROXY_TIMEOUT_SECS") {
            Ok(value) => parse_timeout_secs("PROXY_TIMEOUT_SECS", &value)?,
            Err(_) => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            proxy_url: trim_base_url(&proxy_url),
            proxy_timeout,
            public_base_url: trim_base_url(&public_base_url),
            bind_address,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_timeout_secs(var: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "timeout must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(err) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: err.to_string(),
        }),
    }
}

/// Strips trailing slashes so paths can be appended with `format!("{}/...", base)`.
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
