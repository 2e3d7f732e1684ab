//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error vocabulary shared by the
//! analysis engine and the presentation adapters.

mod compromise;
mod errors;

pub use compromise::CompromiseCoefficient;
pub use errors::{ErrorCode, ValidationError};
