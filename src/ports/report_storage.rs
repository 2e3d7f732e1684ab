//! Report Storage Port - persistence of rendered reports.
//!
//! This port defines the contract for saving rendered report text.
//! Adapters (like LocalReportStorage) provide the implementation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Port for saving rendered reports.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Reject file names that would escape the storage location
/// - Return the absolute location of the saved report
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ReportStorage = &LocalReportStorage::new("reports");
/// let path = storage.save("vikor_report.md", &markdown)?;
/// ```
pub trait ReportStorage: Send + Sync {
    /// Save report content under `file_name`, replacing any previous report.
    fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, StorageError>;

    /// Read a previously saved report.
    fn read(&self, file_name: &str) -> Result<String, StorageError>;
}

/// Errors that can occur during report storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// File name is empty or contains path components.
    #[error("Invalid report file name: {file_name}")]
    InvalidFileName { file_name: String },

    /// Content is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid file name error.
    pub fn invalid_file_name(file_name: impl Into<String>) -> Self {
        Self::InvalidFileName {
            file_name: file_name.into(),
        }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageFailed
    }
}
