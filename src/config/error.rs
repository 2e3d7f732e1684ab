//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Default compromise coefficient must be in [0, 1], got {0}")]
    InvalidCompromise(f64),

    #[error("Report file name must not be empty")]
    EmptyReportFileName,

    #[error("Report precision must be at most {max}, got {actual}")]
    InvalidPrecision { actual: usize, max: usize },

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
