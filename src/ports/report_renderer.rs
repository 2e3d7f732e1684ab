//! Report Renderer Port - human-readable rendering of a ranking.
//!
//! This port defines the contract for turning a decision problem and its
//! ranking into a document. The engine never formats output itself;
//! adapters (like MarkdownReportRenderer) provide the implementation.

use thiserror::Error;

use crate::domain::analysis::RankedResult;
use crate::domain::foundation::ErrorCode;
use crate::domain::problem::DecisionProblem;

/// Port for rendering ranking reports.
///
/// # Contract
///
/// Implementations must:
/// - Take every number shown from the `RankedResult`, never recompute it
/// - Refuse results whose dimensions disagree with the problem
/// - Be deterministic for identical input
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = &MarkdownReportRenderer::new();
/// let text = renderer.render(&problem, &result, &ReportOptions::full())?;
/// ```
pub trait ReportRenderer: Send + Sync {
    /// Render a full report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MismatchedResult` if `result` was not produced
    /// from a problem of the same shape.
    fn render(
        &self,
        problem: &DecisionProblem,
        result: &RankedResult,
        options: &ReportOptions,
    ) -> Result<String, ReportError>;
}

/// Options for report rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include the introductory method description.
    pub include_description: bool,

    /// Decimal places for computed values.
    pub precision: usize,
}

impl ReportOptions {
    /// Every section, four decimals.
    pub fn full() -> Self {
        Self {
            include_description: true,
            precision: 4,
        }
    }

    /// Computation and results only.
    pub fn compact() -> Self {
        Self {
            include_description: false,
            ..Self::full()
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Errors that can occur during report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Result dimensions do not match the problem.
    #[error("Result does not match problem: {dimension} expected {expected}, got {actual}")]
    MismatchedResult {
        dimension: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Writing into the output buffer failed.
    #[error("Report formatting failed: {0}")]
    Format(String),
}

impl ReportError {
    /// Creates a mismatched result error.
    pub fn mismatched(dimension: &'static str, expected: usize, actual: usize) -> Self {
        Self::MismatchedResult {
            dimension,
            expected,
            actual,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ReportFailed
    }
}

impl From<std::fmt::Error> for ReportError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Format(err.to_string())
    }
}
