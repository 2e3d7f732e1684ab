//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Presentation Ports
//!
//! - `ReportRenderer` - Turns a problem and its ranking into a document
//! - `ReportStorage` - Persists rendered documents

mod report_renderer;
mod report_storage;

pub use report_renderer::{ReportError, ReportOptions, ReportRenderer};
pub use report_storage::{ReportStorage, StorageError};
