//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number, got {actual}")]
    NotFinite { field: String, actual: f64 },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite value validation error.
    pub fn not_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
            actual,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyInput,
    ShapeMismatch,
    InvalidScore,
    InvalidWeight,
    InvalidCoefficient,
    NumericOverflow,

    // Presentation errors
    ReportFailed,
    StorageFailed,
    ProblemLoadFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidScore => "INVALID_SCORE",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidCoefficient => "INVALID_COEFFICIENT",
            ErrorCode::NumericOverflow => "NUMERIC_OVERFLOW",
            ErrorCode::ReportFailed => "REPORT_FAILED",
            ErrorCode::StorageFailed => "STORAGE_FAILED",
            ErrorCode::ProblemLoadFailed => "PROBLEM_LOAD_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("v", 0.0, 1.0, 1.5);
        assert_eq!(format!("{}", err), "Field 'v' must be between 0 and 1, got 1.5");
    }

    #[test]
    fn validation_error_not_finite_displays_correctly() {
        let err = ValidationError::not_finite("v", f64::NAN);
        assert_eq!(format!("{}", err), "Field 'v' must be a finite number, got NaN");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ShapeMismatch), "SHAPE_MISMATCH");
        assert_eq!(format!("{}", ErrorCode::InvalidScore), "INVALID_SCORE");
        assert_eq!(format!("{}", ErrorCode::ProblemLoadFailed), "PROBLEM_LOAD_FAILED");
    }
}
