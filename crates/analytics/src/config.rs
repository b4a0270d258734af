use reelscout_core::ReelScoutError;
use serde::{Deserialize, Serialize};

/// Ten years of weekly buckets
pub const MAX_WEEKS: usize = 520;

/// One hundred years
pub const MAX_REPORT_WINDOW_DAYS: i64 = 36_500;

/// Dashboard tuning
///
/// Loaded from an optional `config/analytics` file (any format the `config`
/// crate understands) and `ANALYTICS__*` environment variables, e.g.
/// `ANALYTICS__TOP_N=10`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of weekly buckets in the post series
    pub weeks: usize,

    /// Length of each ranking
    pub top_n: usize,

    /// Window for the recent-reports counter, in days
    pub report_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            weeks: 12,
            top_n: 5,
            report_window_days: 30,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, ReelScoutError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/analytics").required(false))
            .add_source(
                config::Environment::with_prefix("ANALYTICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        let loaded: Self = settings.try_deserialize().map_err(config_error)?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), ReelScoutError> {
        if self.weeks == 0 || self.weeks > MAX_WEEKS {
            return Err(ReelScoutError::ConfigurationError {
                message: format!("weeks must be between 1 and {}", MAX_WEEKS),
                key: Some("ANALYTICS__WEEKS".to_string()),
            });
        }

        if self.top_n == 0 {
            return Err(ReelScoutError::ConfigurationError {
                message: "top_n must be greater than 0".to_string(),
                key: Some("ANALYTICS__TOP_N".to_string()),
            });
        }

        if self.report_window_days <= 0 || self.report_window_days > MAX_REPORT_WINDOW_DAYS {
            return Err(ReelScoutError::ConfigurationError {
                message: format!(
                    "report_window_days must be between 1 and {}",
                    MAX_REPORT_WINDOW_DAYS
                ),
                key: Some("ANALYTICS__REPORT_WINDOW_DAYS".to_string()),
            });
        }

        Ok(())
    }

    /// Only meaningful on a config that passed [`validate`](Self::validate)
    pub fn report_window(&self) -> chrono::Duration {
        chrono::Duration::days(self.report_window_days)
    }
}

fn config_error(e: config::ConfigError) -> ReelScoutError {
    ReelScoutError::ConfigurationError {
        message: format!("Failed to load analytics config: {}", e),
        key: None,
    }
}
