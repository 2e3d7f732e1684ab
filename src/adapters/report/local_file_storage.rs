//! Local Filesystem Storage Adapter - Implementation of ReportStorage.
//!
//! Stores rendered reports as files in a single output directory.
//! Uses atomic writes so a failed save never leaves a partial report.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::ports::{ReportStorage, StorageError};

/// Maximum report size allowed (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem storage for rendered reports.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{file_name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file_name}`
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalReportStorage::new("reports");
/// let path = storage.save("vikor_report.md", "# VIKOR")?;
/// println!("Report saved to file: {}", path.display());
/// ```
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    /// Directory that receives every report.
    output_dir: PathBuf,
}

impl LocalReportStorage {
    /// Creates a new storage writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the configured output directory.
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Resolves a bare file name inside the output directory.
    fn report_path(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let invalid = file_name.trim().is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name == "."
            || file_name.contains("..");
        if invalid {
            return Err(StorageError::invalid_file_name(file_name));
        }
        Ok(self.output_dir.join(file_name))
    }

    /// Ensures the output directory exists.
    fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }
}

impl ReportStorage for LocalReportStorage {
    fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, StorageError> {
        let size = content.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        let final_path = self.report_path(file_name)?;
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        self.ensure_output_dir()?;

        let mut file = fs::File::create(&temp_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(&temp_path, &final_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        let saved = fs::canonicalize(&final_path).map_err(|e| {
            StorageError::io(format!("Failed to resolve {}: {}", final_path.display(), e))
        })?;

        debug!(size_bytes = size, "Report written");
        info!(path = %saved.display(), "Report saved to file");
        Ok(saved)
    }

    fn read(&self, file_name: &str) -> Result<String, StorageError> {
        let path = self.report_path(file_name)?;

        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }
}
