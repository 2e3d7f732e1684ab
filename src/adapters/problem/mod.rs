//! Problem adapters - loading decision problems from files.

mod file_loader;

pub use file_loader::{LoadError, ProblemFileLoader, ProblemFormat};
