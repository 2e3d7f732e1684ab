//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, error vocabulary)
//! - `analysis` - Pure VIKOR engine (reference points, S/R/Q indices, ranking)
//! - `problem` - Labelled decision problems and the reference example

pub mod analysis;
pub mod foundation;
pub mod problem;
