//! Weight Vector - relative importance of each criterion.

use serde::{Deserialize, Serialize};

use super::VikorError;

/// Tolerance used when checking that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Criterion weights, one per column of the criteria matrix.
///
/// Weights are finite and non-negative. They conventionally sum to 1.0,
/// which is checked by [`WeightVector::is_normalized`] but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, validating every weight.
    pub fn new(weights: Vec<f64>) -> Result<Self, VikorError> {
        if weights.is_empty() {
            return Err(VikorError::empty_input("weights"));
        }
        if let Some((j, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(VikorError::InvalidWeight {
                criterion: j + 1,
                value,
            });
        }
        Ok(Self(weights))
    }

    /// Creates equal weights summing to one.
    pub fn uniform(criteria: usize) -> Result<Self, VikorError> {
        if criteria == 0 {
            return Err(VikorError::empty_input("weights"));
        }
        Ok(Self(vec![1.0 / criteria as f64; criteria]))
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty vector cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns one weight (0-based).
    pub fn get(&self, criterion: usize) -> Option<f64> {
        self.0.get(criterion).copied()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns true if the weights sum to one within tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Returns a copy rescaled so the weights sum to one.
    ///
    /// # Errors
    /// `ZeroWeightSum` when every weight is zero.
    pub fn normalized(&self) -> Result<Self, VikorError> {
        let total = self.sum();
        if total == 0.0 {
            return Err(VikorError::ZeroWeightSum);
        }
        Ok(Self(self.0.iter().map(|w| w / total).collect()))
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = VikorError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_weights() {
        let weights = WeightVector::new(vec![0.25, 0.20, 0.20, 0.20, 0.15]).unwrap();
        assert_eq!(weights.len(), 5);
        assert_eq!(weights.get(4), Some(0.15));
        assert!(weights.is_normalized());
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            WeightVector::new(vec![]).unwrap_err(),
            VikorError::empty_input("weights")
        );
    }

    #[test]
    fn new_rejects_negative_weight() {
        let err = WeightVector::new(vec![0.5, -0.1, 0.6]).unwrap_err();
        assert_eq!(err, VikorError::InvalidWeight { criterion: 2, value: -0.1 });
    }

    #[test]
    fn new_rejects_non_finite_weight() {
        assert!(matches!(
            WeightVector::new(vec![0.5, f64::INFINITY]),
            Err(VikorError::InvalidWeight { criterion: 2, .. })
        ));
    }

    #[test]
    fn zero_weights_are_allowed_individually() {
        let weights = WeightVector::new(vec![0.0, 1.0]).unwrap();
        assert!(weights.is_normalized());
    }

    #[test]
    fn normalized_rescales_to_one() {
        let weights = WeightVector::new(vec![2.0, 1.0, 1.0]).unwrap();
        assert!(!weights.is_normalized());

        let normalized = weights.normalized().unwrap();
        assert_eq!(normalized.as_slice(), &[0.5, 0.25, 0.25]);
        assert!(normalized.is_normalized());
    }

    #[test]
    fn normalized_rejects_all_zero() {
        let weights = WeightVector::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(weights.normalized().unwrap_err(), VikorError::ZeroWeightSum);
    }

    #[test]
    fn uniform_splits_evenly() {
        let weights = WeightVector::uniform(4).unwrap();
        assert_eq!(weights.as_slice(), &[0.25; 4]);
        assert!(WeightVector::uniform(0).is_err());
    }

    #[test]
    fn deserialization_validates_weights() {
        let weights: WeightVector = serde_json::from_str("[0.4, 0.6]").unwrap();
        assert_eq!(weights.as_slice(), &[0.4, 0.6]);
        assert!(serde_json::from_str::<WeightVector>("[0.4, -0.6]").is_err());
    }
}
