//! Configuration module for the order service.
//!
//! Loads a YAML file with environment variable interpolation and validates
//! the result. Every section is optional; a missing file yields the defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_service::config::{load_config_or_default, resolve_config_path};
//!
//! let config = load_config_or_default(&resolve_config_path())?;
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod cors;
mod observability;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cors::CorsConfig;
pub use observability::{LogFormat, LoggingConfig, MetricsConfig, ObservabilityConfig};
pub use server::ServerConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "ORDER_SERVICE_CONFIG";

/// Config file used when `ORDER_SERVICE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Config file path from `ORDER_SERVICE_CONFIG`, or `config.yaml`.
#[must_use]
pub fn resolve_config_path() -> String {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from `path`, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns a `ConfigError` if an existing file cannot be read, parsed, or
/// validated.
pub fn load_config_or_default(path: &str) -> Result<Config, ConfigError> {
    if Path::new(path).exists() {
        return load_config(Some(path));
    }

    let config = Config::default();
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    if let Err(e) = config.server.listen_addr() {
        return Err(ConfigError::ValidationError(format!(
            "server.bind_address must be an IP address, got '{}': {e}",
            config.server.bind_address
        )));
    }

    let origin = &config.cors.allowed_origin;
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "cors.allowed_origin must start with http:// or https://, got '{origin}'"
        )));
    }

    if config.cors.origin_header().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "cors.allowed_origin is not a valid header value: '{origin}'"
        )));
    }

    Ok(())
}
