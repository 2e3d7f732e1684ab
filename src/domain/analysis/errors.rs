//! Error types for the VIKOR engine.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while validating engine input.
///
/// All validation happens once at entry to the engine; no partial
/// results are produced. Positions in messages are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VikorError {
    #[error("Empty input: {what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid score {value} for alternative {alternative}, criterion {criterion}")]
    InvalidScore {
        alternative: usize,
        criterion: usize,
        value: f64,
    },

    #[error("Invalid weight {value} for criterion {criterion}: weights must be finite and non-negative")]
    InvalidWeight { criterion: usize, value: f64 },

    #[error("Weights sum to zero and cannot be normalized")]
    ZeroWeightSum,

    #[error("Numeric overflow in {context}: intermediate value is not finite")]
    NumericOverflow { context: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl VikorError {
    /// Creates an empty input error.
    pub fn empty_input(what: &'static str) -> Self {
        Self::EmptyInput { what }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates a numeric overflow error.
    pub fn numeric_overflow(context: impl Into<String>) -> Self {
        Self::NumericOverflow {
            context: context.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput { .. } => ErrorCode::EmptyInput,
            Self::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            Self::InvalidScore { .. } => ErrorCode::InvalidScore,
            Self::InvalidWeight { .. } | Self::ZeroWeightSum => ErrorCode::InvalidWeight,
            Self::NumericOverflow { .. } => ErrorCode::NumericOverflow,
            Self::Validation(_) => ErrorCode::InvalidCoefficient,
        }
    }
}
