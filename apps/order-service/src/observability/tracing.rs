//! Log subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. The configured
//! format selects between the human-readable and the JSON formatter.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Error type for tracing operations.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected filter.
        filter: String,
        /// Parser message.
        reason: String,
    },
    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the env filter for the given configuration.
///
/// # Errors
///
/// Returns `TracingError::InvalidFilter` if `RUST_LOG` is unset and the
/// configured level does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TracingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = format!("{level},tower_http={level}", level = config.level);
    EnvFilter::try_new(&directives).map_err(|e| TracingError::InvalidFilter {
        filter: directives,
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let filter = build_filter(config)?;
    let json = matches!(config.format, LogFormat::Json);

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
    });
    let pretty_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| TracingError::SubscriberError(e.to_string()))
}
