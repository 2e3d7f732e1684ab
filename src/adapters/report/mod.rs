//! Report adapters - Implementations for report rendering and storage.
//!
//! This module provides adapters for the presentation ports:
//! - `MarkdownReportRenderer` - Renders a step-by-step markdown/LaTeX report
//! - `LocalReportStorage` - Stores reports on the local filesystem

mod local_file_storage;
mod markdown_renderer;

pub use local_file_storage::LocalReportStorage;
pub use markdown_renderer::MarkdownReportRenderer;
