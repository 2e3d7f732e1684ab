//! Criteria Matrix - alternatives x criteria score table.

use serde::{Deserialize, Serialize};

use super::VikorError;

/// Scores of every alternative on every criterion.
///
/// Rows are alternatives, columns are criteria. Higher scores are better
/// on every criterion.
///
/// # Invariants
/// - At least one alternative and at least one criterion
/// - Every row has the same length
/// - Every score is finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CriteriaMatrix {
    rows: Vec<Vec<f64>>,
}

impl CriteriaMatrix {
    /// Creates a matrix from rows, validating shape and values.
    ///
    /// # Errors
    /// - `EmptyInput` when there are no rows or the first row is empty
    /// - `ShapeMismatch` when a row's length differs from the first row
    /// - `InvalidScore` when a score is NaN or infinite
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, VikorError> {
        let first = rows
            .first()
            .ok_or_else(|| VikorError::empty_input("criteria matrix"))?;
        let criteria = first.len();
        if criteria == 0 {
            return Err(VikorError::empty_input("criteria"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != criteria {
                return Err(VikorError::shape_mismatch(
                    format!("alternative {}", i + 1),
                    criteria,
                    row.len(),
                ));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(VikorError::InvalidScore {
                    alternative: i + 1,
                    criterion: j + 1,
                    value,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> CriteriaMatrixBuilder {
        CriteriaMatrixBuilder::new()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criteria_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the scores of one alternative (0-based).
    pub fn row(&self, alternative: usize) -> Option<&[f64]> {
        self.rows.get(alternative).map(Vec::as_slice)
    }

    /// Returns one score (0-based indices).
    pub fn score(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.rows.get(alternative)?.get(criterion).copied()
    }

    /// Iterates over the scores of one criterion across alternatives.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(criterion).copied())
    }

    /// Returns the matrix with rows reordered by `order` (0-based indices).
    ///
    /// Returns `None` unless `order` is a permutation of the row indices.
    pub fn permuted(&self, order: &[usize]) -> Option<Self> {
        if order.len() != self.rows.len() {
            return None;
        }
        let mut seen = vec![false; order.len()];
        for &i in order {
            if i >= seen.len() || seen[i] {
                return None;
            }
            seen[i] = true;
        }
        Some(Self {
            rows: order.iter().map(|&i| self.rows[i].clone()).collect(),
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for CriteriaMatrix {
    type Error = VikorError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<CriteriaMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CriteriaMatrix) -> Self {
        matrix.rows
    }
}

/// Builder for constructing CriteriaMatrix instances.
#[derive(Debug, Default)]
pub struct CriteriaMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl CriteriaMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one alternative's scores.
    pub fn alternative(mut self, scores: impl Into<Vec<f64>>) -> Self {
        self.rows.push(scores.into());
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<CriteriaMatrix, VikorError> {
        CriteriaMatrix::new(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_matrix_with_dimensions() {
        let matrix = CriteriaMatrix::builder()
            .alternative([0.8, 0.7, 0.6])
            .alternative([0.9, 0.6, 0.8])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criteria_count(), 3);
        assert_eq!(matrix.score(1, 2), Some(0.8));
        assert_eq!(matrix.score(2, 0), None);
    }

    #[test]
    fn new_rejects_no_alternatives() {
        let err = CriteriaMatrix::new(vec![]).unwrap_err();
        assert_eq!(err, VikorError::empty_input("criteria matrix"));
    }

    #[test]
    fn new_rejects_no_criteria() {
        let err = CriteriaMatrix::new(vec![vec![], vec![]]).unwrap_err();
        assert_eq!(err, VikorError::empty_input("criteria"));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = CriteriaMatrix::new(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert_eq!(err, VikorError::shape_mismatch("alternative 2", 2, 1));
    }

    #[test]
    fn new_rejects_non_finite_scores() {
        let err = CriteriaMatrix::new(vec![vec![1.0, 2.0], vec![1.0, f64::NAN]]).unwrap_err();
        match err {
            VikorError::InvalidScore { alternative, criterion, value } => {
                assert_eq!(alternative, 2);
                assert_eq!(criterion, 2);
                assert!(value.is_nan());
            }
            other => panic!("Expected InvalidScore, got {:?}", other),
        }
    }

    #[test]
    fn column_yields_criterion_scores_in_row_order() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]])
            .unwrap();
        let column: Vec<f64> = matrix.column(1).collect();
        assert_eq!(column, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn permuted_reorders_rows() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let permuted = matrix.permuted(&[2, 0, 1]).unwrap();
        assert_eq!(permuted.rows(), &[vec![3.0], vec![1.0], vec![2.0]]);
    }

    #[test]
    fn permuted_rejects_non_permutation() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matrix.permuted(&[0, 0]).is_none());
        assert!(matrix.permuted(&[0]).is_none());
        assert!(matrix.permuted(&[0, 2]).is_none());
    }

    #[test]
    fn matrix_roundtrips_through_json_with_validation() {
        let matrix = CriteriaMatrix::new(vec![vec![1.0, 2.0]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[1.0,2.0]]");

        let back: CriteriaMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);

        let ragged = "[[1.0,2.0],[3.0]]";
        assert!(serde_json::from_str::<CriteriaMatrix>(ragged).is_err());
    }
}
