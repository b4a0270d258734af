//! Shared configuration loader for ReelScout services
//!
//! Configuration is read from environment variables with the `REELSCOUT_` prefix,
//! optionally seeded from a `.env` file. Precedence: defaults < .env < environment.
//!
//! # Example
//!
//! ```no_run
//! use reelscout_core::config::{ConfigLoader, DatabaseConfig, ServiceConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! reelscout_core::config::load_dotenv();
//!
//! let db_config = DatabaseConfig::from_env()?;
//! let service_config = ServiceConfig::from_env()?;
//!
//! db_config.validate()?;
//! service_config.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::ReelScoutError;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

const INSECURE_DEV_SECRET: &str = "reelscout-dev-secret-change-me";

/// Configuration loader trait
///
/// Standard way to load a configuration section from the environment and
/// validate it before use.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if a required variable is missing or a
    /// value cannot be parsed.
    fn from_env() -> Result<Self, ReelScoutError>;

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if any check fails.
    fn validate(&self) -> Result<(), ReelScoutError>;
}

/// Database configuration
///
/// # Environment Variables
///
/// - `REELSCOUT_DATABASE_URL` (required, falls back to `DATABASE_URL`)
/// - `REELSCOUT_DATABASE_MAX_CONNECTIONS` (default: 20)
/// - `REELSCOUT_DATABASE_MIN_CONNECTIONS` (default: 2)
/// - `REELSCOUT_DATABASE_CONNECT_TIMEOUT` seconds (default: 30)
/// - `REELSCOUT_DATABASE_IDLE_TIMEOUT` seconds (default: 600)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections in the pool
    pub min_connections: u32,
    /// Connection acquire timeout
    pub connect_timeout: Duration,
    /// Idle connection timeout
    pub idle_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/reelscout".to_string(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

impl ConfigLoader for DatabaseConfig {
    fn from_env() -> Result<Self, ReelScoutError> {
        let url = std::env::var("REELSCOUT_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| ReelScoutError::ConfigurationError {
                message: "DATABASE_URL or REELSCOUT_DATABASE_URL must be set".to_string(),
                key: Some("REELSCOUT_DATABASE_URL".to_string()),
            })?;

        let defaults = DatabaseConfig::default();

        let max_connections =
            parse_env_var("REELSCOUT_DATABASE_MAX_CONNECTIONS", defaults.max_connections)?;
        let min_connections =
            parse_env_var("REELSCOUT_DATABASE_MIN_CONNECTIONS", defaults.min_connections)?;
        let connect_timeout_secs = parse_env_var("REELSCOUT_DATABASE_CONNECT_TIMEOUT", 30u64)?;
        let idle_timeout_secs = parse_env_var("REELSCOUT_DATABASE_IDLE_TIMEOUT", 600u64)?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            idle_timeout: Duration::from_secs(idle_timeout_secs),
        })
    }

    fn validate(&self) -> Result<(), ReelScoutError> {
        Url::parse(&self.url).map_err(|e| ReelScoutError::ConfigurationError {
            message: format!("Invalid DATABASE_URL: {}", e),
            key: Some("REELSCOUT_DATABASE_URL".to_string()),
        })?;

        if self.max_connections == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "max_connections must be greater than 0".to_string(),
                key: Some("REELSCOUT_DATABASE_MAX_CONNECTIONS".to_string()),
            });
        }

        if self.min_connections > self.max_connections {
            return Err(ReelScoutError::ConfigurationError {
                message: format!(
                    "min_connections ({}) cannot exceed max_connections ({})",
                    self.min_connections, self.max_connections
                ),
                key: Some("REELSCOUT_DATABASE_MIN_CONNECTIONS".to_string()),
            });
        }

        if self.connect_timeout.as_secs() == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "connect_timeout must be greater than 0 seconds".to_string(),
                key: Some("REELSCOUT_DATABASE_CONNECT_TIMEOUT".to_string()),
            });
        }

        if self.idle_timeout.as_secs() == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "idle_timeout must be greater than 0 seconds".to_string(),
                key: Some("REELSCOUT_DATABASE_IDLE_TIMEOUT".to_string()),
            });
        }

        Ok(())
    }
}

/// HTTP service configuration
///
/// # Environment Variables
///
/// - `REELSCOUT_SERVICE_HOST` (default: "0.0.0.0", falls back to `HOST`)
/// - `REELSCOUT_SERVICE_PORT` (default: 8087, falls back to `PORT`)
/// - `REELSCOUT_SERVICE_WORKERS` (default: CPU count)
/// - `REELSCOUT_SERVICE_LOG_LEVEL` (default: "info", falls back to `RUST_LOG`)
/// - `REELSCOUT_SERVICE_REQUEST_TIMEOUT` seconds (default: 60)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Level or `EnvFilter` directives, e.g. `info` or `reelscout=debug,sqlx=warn`
    pub log_level: String,
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8087,
            workers: num_cpus::get(),
            log_level: "info".to_string(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ServiceConfig {
    /// Address to bind the HTTP server to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigLoader for ServiceConfig {
    fn from_env() -> Result<Self, ReelScoutError> {
        let defaults = ServiceConfig::default();

        let host = std::env::var("REELSCOUT_SERVICE_HOST")
            .or_else(|_| std::env::var("HOST"))
            .unwrap_or(defaults.host);

        let port = match std::env::var("REELSCOUT_SERVICE_PORT") {
            Ok(_) => parse_env_var("REELSCOUT_SERVICE_PORT", defaults.port)?,
            Err(_) => parse_env_var("PORT", defaults.port)?,
        };

        let workers = parse_env_var("REELSCOUT_SERVICE_WORKERS", defaults.workers)?;

        let log_level = std::env::var("REELSCOUT_SERVICE_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(defaults.log_level);

        let request_timeout_secs = parse_env_var("REELSCOUT_SERVICE_REQUEST_TIMEOUT", 60u64)?;

        Ok(Self {
            host,
            port,
            workers,
            log_level,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    fn validate(&self) -> Result<(), ReelScoutError> {
        if self.port == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "port must be greater than 0".to_string(),
                key: Some("REELSCOUT_SERVICE_PORT".to_string()),
            });
        }

        if self.workers == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "workers must be greater than 0".to_string(),
                key: Some("REELSCOUT_SERVICE_WORKERS".to_string()),
            });
        }

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            return Err(ReelScoutError::ConfigurationError {
                message: format!("Invalid log_level '{}': {}", self.log_level, e),
                key: Some("REELSCOUT_SERVICE_LOG_LEVEL".to_string()),
            });
        }

        if self.request_timeout.as_secs() == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "request_timeout must be greater than 0 seconds".to_string(),
                key: Some("REELSCOUT_SERVICE_REQUEST_TIMEOUT".to_string()),
            });
        }

        Ok(())
    }
}

/// Bearer token verification settings
///
/// Tokens are issued by the account service; this side only verifies them.
///
/// # Environment Variables
///
/// - `REELSCOUT_JWT_SECRET` (falls back to `JWT_SECRET`)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 shared secret
    pub jwt_secret: String,
}

impl AuthConfig {
    /// True when no secret was configured and the development default is in use
    pub fn is_insecure_default(&self) -> bool {
        self.jwt_secret == INSECURE_DEV_SECRET
    }
}

impl ConfigLoader for AuthConfig {
    fn from_env() -> Result<Self, ReelScoutError> {
        let jwt_secret = std::env::var("REELSCOUT_JWT_SECRET")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or_else(|_| {
                tracing::warn!("JWT_SECRET not set, using default (INSECURE for production)");
                INSECURE_DEV_SECRET.to_string()
            });

        Ok(Self { jwt_secret })
    }

    fn validate(&self) -> Result<(), ReelScoutError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ReelScoutError::ConfigurationError {
                message: "jwt_secret must not be empty".to_string(),
                key: Some("REELSCOUT_JWT_SECRET".to_string()),
            });
        }

        Ok(())
    }
}

/// Parse an environment variable, falling back to `default` when unset
///
/// # Errors
///
/// Returns a `ConfigurationError` if the variable is set but cannot be parsed.
fn parse_env_var<T>(key: &str, default: T) -> Result<T, ReelScoutError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .ok()
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| ReelScoutError::ConfigurationError {
                    message: format!("Failed to parse {}: {}", key, e),
                    key: Some(key.to_string()),
                })
        })
        .unwrap_or(Ok(default))
}

/// Load a `.env` file if present
///
/// A missing file is not an error.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }
}
