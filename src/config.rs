//! Configuration loading and constants.
//!
//! All settings come from process environment variables with hard-coded
//! defaults, deserialized through `envy`. `Config` is loaded once at
//! startup and held read-only behind `AppState` for the life of the
//! process.

use std::net::SocketAddr;

use serde::Deserialize;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "podling=debug";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Immutable application configuration.
///
/// Field names map to upper-cased environment variables (`APP_NAME`,
/// `PORT`, ...). A missing variable falls back to its default; a value
/// that fails to parse (e.g. a non-numeric `PORT`) is a fatal startup
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Signing secret. No demo endpoint derives anything from it; it
    /// exists so deployments can practice wiring secrets through the
    /// environment.
    #[serde(default = "Config::default_secret_key")]
    pub secret_key: String,

    /// Display name shown on pages and in health payloads
    #[serde(default = "Config::default_app_name")]
    pub app_name: String,

    /// Version string reported by the health and info endpoints
    #[serde(default = "Config::default_app_version")]
    pub app_version: String,

    /// Deployment environment name (development, staging, production)
    #[serde(default = "Config::default_environment")]
    pub environment: String,

    /// Bind host
    #[serde(default = "Config::default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "Config::default_port")]
    pub port: u16,

    /// Verbose serving mode. Independent of `environment`; error
    /// responses stay generic regardless of this flag.
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    fn default_secret_key() -> String {
        "dev-secret-key-change-in-production".to_string()
    }

    fn default_app_name() -> String {
        "Kubernetes Learning App".to_string()
    }

    fn default_app_version() -> String {
        "1.0.0".to_string()
    }

    fn default_environment() -> String {
        "development".to_string()
    }

    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        5000
    }

    /// Load configuration from the environment, reading a `.env` file
    /// first if one is present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = envy::from_env()?;
        Ok(config)
    }

    /// The socket address to bind, assembled from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("invalid HOST or PORT: {}", e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
