//! Problem module - labelled decision problems fed to the engine.

mod decision_problem;

pub use decision_problem::DecisionProblem;
