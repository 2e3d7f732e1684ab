//! Report output configuration

use serde::Deserialize;

use crate::ports::ReportOptions;

use super::error::ValidationError;

/// Largest supported number of decimal places.
const MAX_PRECISION: usize = 12;

/// Report rendering and output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Write a report after ranking
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directory that receives the report
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Report file name inside `output_dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Decimal places for computed values
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Include the method description section
    #[serde(default = "default_include_description")]
    pub include_description: bool,
}

impl ReportConfig {
    /// Rendering options derived from this configuration
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            include_description: self.include_description,
            precision: self.precision,
        }
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file_name.trim().is_empty() {
            return Err(ValidationError::EmptyReportFileName);
        }
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision {
                actual: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            precision: default_precision(),
            include_description: default_include_description(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_file_name() -> String {
    "vikor_report.md".to_string()
}

fn default_precision() -> usize {
    4
}

fn default_include_description() -> bool {
    true
}
