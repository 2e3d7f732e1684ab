//! Analysis Module - Pure domain services for compromise ranking.
//!
//! This module contains the VIKOR engine and the value types it consumes
//! and produces.
//!
//! # Components
//!
//! - `CriteriaMatrix` - Alternatives x criteria scores (higher is better)
//! - `WeightVector` - Non-negative criterion weights
//! - `VikorAnalyzer` - Reference points, S/R/Q indices and ranking
//! - `RankedResult` - Immutable output carrying every intermediate value
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Identical
//! inputs always produce identical outputs, so independent runs can be
//! executed in parallel without coordination.

mod criteria_matrix;
mod errors;
mod ranking;
mod vikor_analyzer;
mod weights;

pub use criteria_matrix::{CriteriaMatrix, CriteriaMatrixBuilder};
pub use errors::VikorError;
pub use ranking::{Degeneracy, IndexBounds, RankedAlternative, RankedResult, ReferencePoints};
pub use vikor_analyzer::VikorAnalyzer;
pub use weights::{WeightVector, WEIGHT_SUM_TOLERANCE};
