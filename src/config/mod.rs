//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VIKOR` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use vikor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports go to {}", config.report.output_dir);
//! ```

mod engine;
mod error;
mod logging;
mod report;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::ReportConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ranking defaults (compromise coefficient, weight normalization)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Report rendering and output
    #[serde(default)]
    pub report: ReportConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VIKOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VIKOR__ENGINE__DEFAULT_COMPROMISE=0.3` -> `engine.default_compromise = 0.3`
    /// - `VIKOR__REPORT__OUTPUT_DIR=reports` -> `report.output_dir = "reports"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VIKOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "VIKOR__ENGINE__DEFAULT_COMPROMISE",
        "VIKOR__ENGINE__NORMALIZE_WEIGHTS",
        "VIKOR__REPORT__OUTPUT_DIR",
        "VIKOR__REPORT__PRECISION",
        "VIKOR__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.default_compromise, 0.5);
        assert_eq!(config.report.file_name, "vikor_report.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VIKOR__ENGINE__DEFAULT_COMPROMISE", "0.25");
        env::set_var("VIKOR__ENGINE__NORMALIZE_WEIGHTS", "true");
        env::set_var("VIKOR__REPORT__OUTPUT_DIR", "reports");
        env::set_var("VIKOR__REPORT__PRECISION", "6");
        env::set_var("VIKOR__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.default_compromise, 0.25);
        assert!(config.engine.normalize_weights);
        assert_eq!(config.report.output_dir, "reports");
        assert_eq!(config.report.precision, 6);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_out_of_range_compromise() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VIKOR__ENGINE__DEFAULT_COMPROMISE", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCompromise(1.5))
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
