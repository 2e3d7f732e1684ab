//! Ranking result types produced by the VIKOR analyzer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CompromiseCoefficient;

use super::CriteriaMatrix;

/// Per-criterion best (f*) and worst (f-) observed scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    pub ideal_f: Vec<f64>,
    pub anti_ideal_f: Vec<f64>,
}

impl ReferencePoints {
    /// Computes f* (column maximum) and f- (column minimum) for every criterion.
    pub fn from_matrix(matrix: &CriteriaMatrix) -> Self {
        let criteria = matrix.criteria_count();
        let mut ideal_f = Vec::with_capacity(criteria);
        let mut anti_ideal_f = Vec::with_capacity(criteria);

        for j in 0..criteria {
            let (max, min) = matrix
                .column(j)
                .fold((f64::NEG_INFINITY, f64::INFINITY), |(max, min), x| {
                    (max.max(x), min.min(x))
                });
            ideal_f.push(max);
            anti_ideal_f.push(min);
        }

        Self {
            ideal_f,
            anti_ideal_f,
        }
    }

    /// Returns `f*[j] - f-[j]`.
    pub fn span(&self, criterion: usize) -> f64 {
        self.ideal_f[criterion] - self.anti_ideal_f[criterion]
    }

    /// Returns true if every alternative scores identically on the criterion.
    pub fn is_degenerate(&self, criterion: usize) -> bool {
        self.ideal_f[criterion] == self.anti_ideal_f[criterion]
    }
}

/// Extremes of the S and R indices across alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexBounds {
    /// Minimum S (best group utility).
    pub s_star: f64,
    /// Maximum S.
    pub s_minus: f64,
    /// Minimum R (least individual regret).
    pub r_star: f64,
    /// Maximum R.
    pub r_minus: f64,
}

impl IndexBounds {
    /// Computes the bounds from non-empty S and R sequences.
    pub fn from_indices(s_values: &[f64], r_values: &[f64]) -> Self {
        let (s_star, s_minus) = min_max(s_values);
        let (r_star, r_minus) = min_max(r_values);
        Self {
            s_star,
            s_minus,
            r_star,
            r_minus,
        }
    }

    /// Returns `S- - S*`.
    pub fn s_span(&self) -> f64 {
        self.s_minus - self.s_star
    }

    /// Returns `R- - R*`.
    pub fn r_span(&self) -> f64 {
        self.r_minus - self.r_star
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &x| {
            (min.min(x), max.max(x))
        })
}

/// Denominators that were zero and replaced by a zero contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degeneracy {
    /// Criteria (0-based) on which every alternative scores the same.
    pub criteria: Vec<usize>,
    /// Every alternative has the same S.
    pub s_range: bool,
    /// Every alternative has the same R.
    pub r_range: bool,
}

impl Degeneracy {
    /// Returns true if no substitution happened.
    pub fn is_none(&self) -> bool {
        self.criteria.is_empty() && !self.s_range && !self.r_range
    }
}

/// One entry of the compromise ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based alternative index in input order.
    pub alternative: usize,
    pub q: f64,
}

/// Complete output of one VIKOR run.
///
/// Index sequences are aligned with the input alternative order.
/// Alternative numbers exposed by this type are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    best_alternative: usize,
    s_values: Vec<f64>,
    r_values: Vec<f64>,
    q_values: Vec<f64>,
    ranked_alternatives: Vec<RankedAlternative>,
    reference_points: ReferencePoints,
    weighted_distances: Vec<Vec<f64>>,
    bounds: IndexBounds,
    compromise: CompromiseCoefficient,
    degeneracy: Degeneracy,
}

impl RankedResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        best_alternative: usize,
        s_values: Vec<f64>,
        r_values: Vec<f64>,
        q_values: Vec<f64>,
        ranked_alternatives: Vec<RankedAlternative>,
        reference_points: ReferencePoints,
        weighted_distances: Vec<Vec<f64>>,
        bounds: IndexBounds,
        compromise: CompromiseCoefficient,
        degeneracy: Degeneracy,
    ) -> Self {
        Self {
            best_alternative,
            s_values,
            r_values,
            q_values,
            ranked_alternatives,
            reference_points,
            weighted_distances,
            bounds,
            compromise,
            degeneracy,
        }
    }

    /// 1-based index of the alternative with the lowest Q.
    pub fn best_alternative(&self) -> usize {
        self.best_alternative
    }

    /// Group utility index per alternative.
    pub fn s_values(&self) -> &[f64] {
        &self.s_values
    }

    /// Individual regret index per alternative.
    pub fn r_values(&self) -> &[f64] {
        &self.r_values
    }

    /// Compromise index per alternative.
    pub fn q_values(&self) -> &[f64] {
        &self.q_values
    }

    /// Alternatives sorted ascending by Q, ties in input order.
    pub fn ranked_alternatives(&self) -> &[RankedAlternative] {
        &self.ranked_alternatives
    }

    pub fn reference_points(&self) -> &ReferencePoints {
        &self.reference_points
    }

    /// `w[j] * (f*[j] - f[i][j]) / (f*[j] - f-[j])` for every alternative i and criterion j.
    pub fn weighted_distances(&self) -> &[Vec<f64>] {
        &self.weighted_distances
    }

    pub fn bounds(&self) -> &IndexBounds {
        &self.bounds
    }

    /// The coefficient v used for Q.
    pub fn compromise(&self) -> CompromiseCoefficient {
        self.compromise
    }

    pub fn degeneracy(&self) -> &Degeneracy {
        &self.degeneracy
    }

    pub fn alternative_count(&self) -> usize {
        self.q_values.len()
    }

    pub fn criteria_count(&self) -> usize {
        self.reference_points.ideal_f.len()
    }

    /// Returns the 1-based rank of a 1-based alternative.
    pub fn rank_of(&self, alternative: usize) -> Option<usize> {
        self.ranked_alternatives
            .iter()
            .position(|r| r.alternative == alternative)
            .map(|pos| pos + 1)
    }
}
