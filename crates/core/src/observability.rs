//! Structured logging setup

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shipping
    Json,
    /// Human-readable output for local development
    Pretty,
}

impl LogFormat {
    /// Parse from `REELSCOUT_LOG_FORMAT`; anything but "pretty" means JSON
    pub fn from_env() -> Self {
        match std::env::var("REELSCOUT_LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
    pub service_name: String,
}

impl LogConfig {
    pub fn new(service_name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: LogFormat::from_env(),
            service_name: service_name.into(),
        }
    }

    /// Resolve the effective filter: `RUST_LOG` wins over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| ObservabilityError::InvalidFilter(self.level.clone(), e.to_string())),
        }
    }
}

/// Install the global tracing subscriber
///
/// Must be called once at startup, before any spans are created.
pub fn init_logging(config: &LogConfig) -> Result<(), ObservabilityError> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::SubscriberInit(e.to_string()))?;

    tracing::info!(service = %config.service_name, "Logging initialized");
    Ok(())
}
