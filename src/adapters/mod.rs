//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `report` - Markdown rendering and local file storage for reports
//! - `problem` - Loading decision problems from JSON/YAML files

pub mod problem;
pub mod report;

pub use problem::{LoadError, ProblemFileLoader, ProblemFormat};
pub use report::{LocalReportStorage, MarkdownReportRenderer};
