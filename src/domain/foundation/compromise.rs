//! Compromise coefficient value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Weight of the group-utility strategy (S) against individual regret (R).
///
/// `v = 1` ranks purely by group utility, `v = 0` purely by regret.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompromiseCoefficient(f64);

impl CompromiseCoefficient {
    /// Balanced strategy, the conventional default.
    pub const BALANCED: Self = Self(0.5);

    /// Rank by regret only.
    pub const REGRET_ONLY: Self = Self(0.0);

    /// Rank by group utility only.
    pub const UTILITY_ONLY: Self = Self(1.0);

    /// Creates a coefficient, clamping finite values into [0, 1].
    ///
    /// Non-finite input falls back to [`CompromiseCoefficient::BALANCED`].
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::BALANCED
        }
    }

    /// Creates a coefficient, returning error if not finite or out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("compromise", value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("compromise", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Weight applied to the regret term, `1 - v`.
    pub fn regret_weight(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for CompromiseCoefficient {
    fn default() -> Self {
        Self::BALANCED
    }
}

impl TryFrom<f64> for CompromiseCoefficient {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CompromiseCoefficient> for f64 {
    fn from(v: CompromiseCoefficient) -> Self {
        v.0
    }
}

impl fmt::Display for CompromiseCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
