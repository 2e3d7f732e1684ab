//! Decision Problem - a complete, labelled VIKOR input.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{CriteriaMatrix, RankedResult, VikorAnalyzer, VikorError, WeightVector};
use crate::domain::foundation::CompromiseCoefficient;

/// Scores, weights and optional labels describing one ranking problem.
///
/// Labels are optional; when absent, alternatives and criteria are
/// referred to by their 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<String>,
    pub matrix: CriteriaMatrix,
    pub weights: WeightVector,
    /// Overrides the configured default coefficient when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compromise: Option<CompromiseCoefficient>,
}

impl DecisionProblem {
    /// Creates an unlabelled problem.
    pub fn new(matrix: CriteriaMatrix, weights: WeightVector) -> Self {
        Self {
            name: None,
            alternatives: Vec::new(),
            criteria: Vec::new(),
            matrix,
            weights,
            compromise: None,
        }
    }

    /// The fixed three-alternative, five-criterion example.
    pub fn reference_example() -> Result<Self, VikorError> {
        let matrix = CriteriaMatrix::builder()
            .alternative([0.8, 0.7, 0.6, 0.9, 0.85])
            .alternative([0.9, 0.6, 0.8, 0.7, 0.9])
            .alternative([0.7, 0.8, 0.7, 0.8, 0.75])
            .build()?;
        let weights = WeightVector::new(vec![0.25, 0.20, 0.20, 0.20, 0.15])?;

        Ok(Self::new(matrix, weights)
            .with_name("Reference example")
            .with_compromise(CompromiseCoefficient::BALANCED))
    }

    /// Sets the problem name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the alternative labels.
    pub fn with_alternative_labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.alternatives = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the criterion labels.
    pub fn with_criterion_labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.criteria = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the compromise coefficient.
    pub fn with_compromise(mut self, v: CompromiseCoefficient) -> Self {
        self.compromise = Some(v);
        self
    }

    /// Returns the problem with weights rescaled to sum to one.
    pub fn with_normalized_weights(mut self) -> Result<Self, VikorError> {
        self.weights = self.weights.normalized()?;
        Ok(self)
    }

    /// Checks that weights and labels agree with the matrix dimensions.
    pub fn validate(&self) -> Result<(), VikorError> {
        if self.weights.len() != self.matrix.criteria_count() {
            return Err(VikorError::shape_mismatch(
                "weights",
                self.matrix.criteria_count(),
                self.weights.len(),
            ));
        }
        if !self.alternatives.is_empty() && self.alternatives.len() != self.matrix.alternative_count() {
            return Err(VikorError::shape_mismatch(
                "alternative labels",
                self.matrix.alternative_count(),
                self.alternatives.len(),
            ));
        }
        if !self.criteria.is_empty() && self.criteria.len() != self.matrix.criteria_count() {
            return Err(VikorError::shape_mismatch(
                "criterion labels",
                self.matrix.criteria_count(),
                self.criteria.len(),
            ));
        }
        Ok(())
    }

    /// Coefficient to use: the problem's own, else `default`.
    pub fn effective_compromise(&self, default: CompromiseCoefficient) -> CompromiseCoefficient {
        self.compromise.unwrap_or(default)
    }

    /// Validates the problem and ranks its alternatives.
    pub fn solve(&self, default: CompromiseCoefficient) -> Result<RankedResult, VikorError> {
        self.validate()?;
        VikorAnalyzer::rank(&self.matrix, &self.weights, self.effective_compromise(default))
    }

    /// Display label for an alternative (0-based).
    pub fn alternative_label(&self, alternative: usize) -> String {
        self.alternatives
            .get(alternative)
            .cloned()
            .unwrap_or_else(|| format!("Alternative {}", alternative + 1))
    }

    /// Display label for a criterion (0-based).
    pub fn criterion_label(&self, criterion: usize) -> String {
        self.criteria
            .get(criterion)
            .cloned()
            .unwrap_or_else(|| format!("Criterion {}", criterion + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> DecisionProblem {
        let matrix = CriteriaMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let weights = WeightVector::new(vec![0.7, 0.3]).unwrap();
        DecisionProblem::new(matrix, weights)
    }

    #[test]
    fn reference_example_solves_to_alternative_two() {
        let problem = DecisionProblem::reference_example().unwrap();
        let result = problem.solve(CompromiseCoefficient::BALANCED).unwrap();
        assert_eq!(result.best_alternative(), 2);
        assert_eq!(problem.matrix.alternative_count(), 3);
        assert_eq!(problem.matrix.criteria_count(), 5);
    }

    #[test]
    fn default_labels_are_one_based() {
        let problem = two_by_two();
        assert_eq!(problem.alternative_label(0), "Alternative 1");
        assert_eq!(problem.criterion_label(1), "Criterion 2");
    }

    #[test]
    fn explicit_labels_are_used() {
        let problem = two_by_two()
            .with_alternative_labels(vec!["Cheap", "Premium"])
            .with_criterion_labels(vec!["Cost", "Quality"]);
        assert_eq!(problem.alternative_label(1), "Premium");
        assert_eq!(problem.criterion_label(0), "Cost");
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn validate_rejects_label_count_mismatch() {
        let problem = two_by_two().with_alternative_labels(vec!["Only one"]);
        assert_eq!(
            problem.validate().unwrap_err(),
            VikorError::shape_mismatch("alternative labels", 2, 1)
        );

        let problem = two_by_two().with_criterion_labels(vec!["A", "B", "C"]);
        assert_eq!(
            problem.validate().unwrap_err(),
            VikorError::shape_mismatch("criterion labels", 2, 3)
        );
    }

    #[test]
    fn solve_rejects_weight_count_mismatch() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let weights = WeightVector::new(vec![1.0]).unwrap();
        let problem = DecisionProblem::new(matrix, weights);
        assert!(matches!(
            problem.solve(CompromiseCoefficient::BALANCED),
            Err(VikorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn own_compromise_overrides_default() {
        let problem = two_by_two().with_compromise(CompromiseCoefficient::UTILITY_ONLY);
        let result = problem.solve(CompromiseCoefficient::BALANCED).unwrap();
        assert_eq!(result.compromise(), CompromiseCoefficient::UTILITY_ONLY);

        let problem = two_by_two();
        let result = problem.solve(CompromiseCoefficient::REGRET_ONLY).unwrap();
        assert_eq!(result.compromise(), CompromiseCoefficient::REGRET_ONLY);
    }

    #[test]
    fn with_normalized_weights_rescales() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0, 0.0]]).unwrap();
        let weights = WeightVector::new(vec![3.0, 1.0]).unwrap();
        let problem = DecisionProblem::new(matrix, weights)
            .with_normalized_weights()
            .unwrap();
        assert_eq!(problem.weights.as_slice(), &[0.75, 0.25]);
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = r#"
name: Supplier selection
alternatives: [North, South]
criteria: [Price, Delivery]
matrix:
  - [0.6, 0.9]
  - [0.8, 0.5]
weights: [0.5, 0.5]
compromise: 0.4
"#;
        let problem: DecisionProblem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(problem.name.as_deref(), Some("Supplier selection"));
        assert_eq!(problem.alternatives, vec!["North", "South"]);
        assert_eq!(problem.matrix.score(1, 0), Some(0.8));
        assert_eq!(problem.compromise.map(|v| v.value()), Some(0.4));
    }

    #[test]
    fn deserialization_rejects_invalid_matrix() {
        let json = r#"{"matrix": [[0.1, 0.2], [0.3]], "weights": [0.5, 0.5]}"#;
        assert!(serde_json::from_str::<DecisionProblem>(json).is_err());
    }

    #[test]
    fn serializes_without_empty_labels() {
        let json = serde_json::to_string(&two_by_two()).unwrap();
        assert_eq!(json, r#"{"matrix":[[1.0,0.0],[0.0,1.0]],"weights":[0.7,0.3]}"#);
    }
}
