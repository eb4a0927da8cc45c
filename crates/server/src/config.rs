//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `HOMESTEAD_HOST` - Bind address (default: 127.0.0.1)
//! - `HOMESTEAD_PORT` - Listen port (default: 5000)
//! - `HOMESTEAD_SEED` - Load the mock listings at startup (default: true)
//! - `HOMESTEAD_CORS_ORIGIN` - Browser origin allowed to call the API
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether to load the mock listings into the store at startup
    pub seed: bool,
    /// Origin allowed by CORS, if any
    pub cors_origin: Option<HeaderValue>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            seed: true,
            cors_origin: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ServerConfig {
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

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOMESTEAD_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| invalid("HOMESTEAD_HOST", &e))?,
            None => defaults.host,
        };
        let port = match lookup("HOMESTEAD_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| invalid("HOMESTEAD_PORT", &e))?,
            None => defaults.port,
        };
        let seed = match lookup("HOMESTEAD_SEED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "HOMESTEAD_SEED".to_string(),
                    format!("expected a boolean, got '{raw}'"),
                )
            })?,
            None => defaults.seed,
        };
        let cors_origin = lookup("HOMESTEAD_CORS_ORIGIN")
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|e| invalid("HOMESTEAD_CORS_ORIGIN", &e))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            seed,
            cors_origin,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(key: &str, error: &impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}

/// Parse a boolean flag in the spellings people put in `.env` files.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
