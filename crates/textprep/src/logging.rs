//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`,
//! or by the configured level when `RUST_LOG` is unset or invalid.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::errors::ConfigError;

/// Builds the filter: `RUST_LOG` first, then `config.level`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Installs the global subscriber.
///
/// # Errors
/// `ConfigError::LoggingInit` when a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
  tracing_subscriber::registry()
    .with(env_filter(config))
    .with(tracing_subscriber::fmt::layer())
    .try_init()
    .map_err(|e| ConfigError::LoggingInit { reason: e.to_string() })
}
