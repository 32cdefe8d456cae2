//! Configuration management.
//!
//! Settings are layered from configuration files and environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! [telemetry]
//! log_level = "debug"
//! json_logging = false
//!
//! [points]
//! winning_side_points = 20.0
//! eval_base_points = 50.0
//! eval_penalty_per_pawn = 16.0
//! best_move_max_multiplier = 3.0
//! best_move_decay_per_pawn = 0.75
//! best_move_min_multiplier = 1.0
//! player_or_tournament_points = 10.0
//! ```

use anyhow::{Context, Result};
use eval_quiz_domain::PointTable;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "EVAL_QUIZ";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Scoring curve constants
    #[serde(default)]
    pub points: PointTable,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from EVAL_QUIZ_ENV)
    /// 4. Environment variables prefixed with EVAL_QUIZ_, nested keys separated by `__`
    ///    (e.g. `EVAL_QUIZ_POINTS__WINNING_SIDE_POINTS=25`)
    pub fn load() -> Result<Self> {
        let env = std::env::var(format!("{}_ENV", ENV_PREFIX))
            .unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Self::environment())
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    /// `EVAL_QUIZ_` followed by `__`-separated keys.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from a TOML document only.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self> {
        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        self.points
            .validate()
            .context("Invalid [points] configuration")?;

        Ok(())
    }
}
