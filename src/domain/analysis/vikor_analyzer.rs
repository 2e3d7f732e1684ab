//! VIKOR Analyzer - compromise ranking of alternatives over weighted criteria.

use tracing::{debug, warn};

use crate::domain::foundation::CompromiseCoefficient;

use super::{
    CriteriaMatrix, Degeneracy, IndexBounds, RankedAlternative, RankedResult, ReferencePoints,
    VikorError, WeightVector,
};

/// VIKOR ranking functions.
pub struct VikorAnalyzer;

impl VikorAnalyzer {
    /// Ranks alternatives from raw scores, weights and compromise coefficient.
    ///
    /// Validates everything before computing:
    /// matrix shape and scores, then weights, then `v`.
    ///
    /// # Errors
    /// `EmptyInput`, `ShapeMismatch`, `InvalidScore`, `InvalidWeight`,
    /// `Validation` for a coefficient outside [0, 1], or `NumericOverflow`
    /// when finite scores or weights overflow during computation.
    pub fn compute(
        criteria_matrix: &[Vec<f64>],
        weights: &[f64],
        v: f64,
    ) -> Result<RankedResult, VikorError> {
        let matrix = CriteriaMatrix::new(criteria_matrix.to_vec())?;
        if weights.len() != matrix.criteria_count() {
            return Err(VikorError::shape_mismatch(
                "weights",
                matrix.criteria_count(),
                weights.len(),
            ));
        }
        let weights = WeightVector::new(weights.to_vec())?;
        let v = CompromiseCoefficient::try_new(v)?;

        Self::rank(&matrix, &weights, v)
    }

    /// Ranks alternatives of an already validated matrix.
    ///
    /// # Algorithm
    /// 1. f*[j] = max_i f[i][j], f-[j] = min_i f[i][j]
    /// 2. d[i][j] = w[j] * (f*[j] - f[i][j]) / (f*[j] - f-[j])
    /// 3. S[i] = Σ_j d[i][j], R[i] = max_j d[i][j]
    /// 4. Q[i] = v·(S[i] - S*)/(S- - S*) + (1 - v)·(R[i] - R*)/(R- - R*)
    ///
    /// # Edge Cases
    /// - Uniform criterion (f* == f-): contributes 0 to every alternative
    /// - Uniform S or R: that Q term is 0 for every alternative
    /// - Equal Q: best is the first in input order, ranking keeps input order
    /// - Criterion range or S overflowing f64: `NumericOverflow`, no result
    pub fn rank(
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        v: CompromiseCoefficient,
    ) -> Result<RankedResult, VikorError> {
        if weights.len() != matrix.criteria_count() {
            return Err(VikorError::shape_mismatch(
                "weights",
                matrix.criteria_count(),
                weights.len(),
            ));
        }
        if !weights.is_normalized() {
            warn!(sum = weights.sum(), "Criterion weights do not sum to 1");
        }

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criteria_count(),
            v = %v,
            "Computing VIKOR ranking"
        );

        let reference_points = ReferencePoints::from_matrix(matrix);
        let degenerate_criteria: Vec<usize> = (0..matrix.criteria_count())
            .filter(|&j| reference_points.is_degenerate(j))
            .collect();
        if !degenerate_criteria.is_empty() {
            warn!(
                criteria = ?degenerate_criteria,
                "Criteria do not distinguish alternatives; their distances are zero"
            );
        }

        if let Some(j) = (0..matrix.criteria_count()).find(|&j| !reference_points.span(j).is_finite()) {
            return Err(VikorError::numeric_overflow(format!(
                "score range of criterion {}",
                j + 1
            )));
        }

        let weighted_distances = Self::weighted_distances(matrix, weights, &reference_points);
        let s_values = Self::group_utility(&weighted_distances);
        // R[i] <= S[i], so a finite S bounds R as well.
        if let Some(i) = s_values.iter().position(|s| !s.is_finite()) {
            return Err(VikorError::numeric_overflow(format!(
                "group utility of alternative {}",
                i + 1
            )));
        }
        let r_values = Self::individual_regret(&weighted_distances);
        let bounds = IndexBounds::from_indices(&s_values, &r_values);

        let degeneracy = Degeneracy {
            criteria: degenerate_criteria,
            s_range: bounds.s_span() == 0.0,
            r_range: bounds.r_span() == 0.0,
        };
        if degeneracy.s_range || degeneracy.r_range {
            warn!(
                s_range = degeneracy.s_range,
                r_range = degeneracy.r_range,
                "Index range is zero; the matching Q term is zero"
            );
        }

        let q_values = Self::compromise_index(&s_values, &r_values, &bounds, v);
        let best_alternative = Self::first_minimum(&q_values) + 1;
        let ranked_alternatives = Self::ranking(&q_values);

        debug!(
            best_alternative,
            s_star = bounds.s_star,
            r_star = bounds.r_star,
            "VIKOR ranking computed"
        );

        Ok(RankedResult::new(
            best_alternative,
            s_values,
            r_values,
            q_values,
            ranked_alternatives,
            reference_points,
            weighted_distances,
            bounds,
            v,
            degeneracy,
        ))
    }

    /// Weighted normalized distance of every score from the ideal.
    fn weighted_distances(
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        points: &ReferencePoints,
    ) -> Vec<Vec<f64>> {
        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .enumerate()
                    .map(|(j, (&score, &weight))| {
                        let normalized = if points.is_degenerate(j) {
                            0.0
                        } else {
                            (points.ideal_f[j] - score) / (points.ideal_f[j] - points.anti_ideal_f[j])
                        };
                        weight * normalized
                    })
                    .collect()
            })
            .collect()
    }

    /// S[i]: sum of weighted distances, accumulated left to right.
    fn group_utility(distances: &[Vec<f64>]) -> Vec<f64> {
        distances
            .iter()
            .map(|row| row.iter().fold(0.0, |acc, d| acc + d))
            .collect()
    }

    /// R[i]: largest weighted distance.
    fn individual_regret(distances: &[Vec<f64>]) -> Vec<f64> {
        distances
            .iter()
            .map(|row| row.iter().fold(0.0, |acc: f64, &d| acc.max(d)))
            .collect()
    }

    fn compromise_index(
        s_values: &[f64],
        r_values: &[f64],
        bounds: &IndexBounds,
        v: CompromiseCoefficient,
    ) -> Vec<f64> {
        let v_s = v.value();
        let v_r = v.regret_weight();
        let s_span = bounds.s_span();
        let r_span = bounds.r_span();

        s_values
            .iter()
            .zip(r_values)
            .map(|(&s, &r)| {
                let s_term = if s_span == 0.0 {
                    0.0
                } else {
                    v_s * (s - bounds.s_star) / s_span
                };
                let r_term = if r_span == 0.0 {
                    0.0
                } else {
                    v_r * (r - bounds.r_star) / r_span
                };
                s_term + r_term
            })
            .collect()
    }

    /// 0-based index of the first minimum in an ascending scan.
    fn first_minimum(values: &[f64]) -> usize {
        let mut best = 0;
        for (i, &value) in values.iter().enumerate().skip(1) {
            if value < values[best] {
                best = i;
            }
        }
        best
    }

    /// Alternatives ordered ascending by Q with a stable sort.
    fn ranking(q_values: &[f64]) -> Vec<RankedAlternative> {
        let mut ranked: Vec<RankedAlternative> = q_values
            .iter()
            .enumerate()
            .map(|(i, &q)| RankedAlternative {
                alternative: i + 1,
                q,
            })
            .collect();
        ranked.sort_by(|a, b| a.q.total_cmp(&b.q));
        ranked
    }
}
