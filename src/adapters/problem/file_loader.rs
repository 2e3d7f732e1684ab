//! Problem file loader - reads a `DecisionProblem` from JSON or YAML.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::ErrorCode;
use crate::domain::problem::DecisionProblem;

/// Maximum problem file size allowed (10 MB).
const MAX_PROBLEM_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Supported problem file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Json,
    Yaml,
}

impl ProblemFormat {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur while loading a problem file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported problem file format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: String },
}

impl LoadError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ProblemLoadFailed
    }
}

/// Loads decision problems from the filesystem.
///
/// Parsing goes through the domain types' own deserializers, so a file
/// with a ragged matrix, a non-finite score or a negative weight fails
/// with `LoadError::Parse`. Label and weight counts are checked later by
/// `DecisionProblem::validate`.
#[derive(Debug, Clone, Default)]
pub struct ProblemFileLoader;

impl ProblemFileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses the file at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DecisionProblem, LoadError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let format = ProblemFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: shown.clone(),
        })?;

        let size = fs::metadata(path)
            .map_err(|e| LoadError::Io {
                path: shown.clone(),
                message: e.to_string(),
            })?
            .len();
        if size > MAX_PROBLEM_FILE_BYTES {
            return Err(LoadError::Io {
                path: shown,
                message: format!("file too large: {} bytes (max: {})", size, MAX_PROBLEM_FILE_BYTES),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let problem = Self::parse(&content, format).map_err(|message| LoadError::Parse {
            path: shown.clone(),
            message,
        })?;

        debug!(
            path = %shown,
            alternatives = problem.matrix.alternative_count(),
            criteria = problem.matrix.criteria_count(),
            "Problem file loaded"
        );
        Ok(problem)
    }

    /// Parses problem text in the given format.
    pub fn parse(content: &str, format: ProblemFormat) -> Result<DecisionProblem, String> {
        match format {
            ProblemFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ProblemFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}
