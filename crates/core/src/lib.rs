//! # ReelScout Core
//!
//! Shared building blocks for ReelScout services.
//!
//! ## Modules
//!
//! - `config`: Environment-based configuration loading and validation
//! - `database`: Shared PostgreSQL connection pool
//! - `error`: Error type and HTTP mapping
//! - `models`: Domain models for catalog content, forums and accounts
//! - `observability`: Structured logging setup

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod observability;

pub use config::{load_dotenv, AuthConfig, ConfigLoader, DatabaseConfig, ServiceConfig};
pub use database::{DatabasePool, PoolStats};
pub use error::ReelScoutError;
pub use observability::{init_logging, LogConfig, LogFormat, ObservabilityError};

/// Result type alias for ReelScout operations
pub type Result<T> = std::result::Result<T, ReelScoutError>;
