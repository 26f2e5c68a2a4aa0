//! Configuration for fitness evaluation
//!
//! Level 4 - Utilities and configuration

/// Configuration for fitness evaluation
#[derive(Clone, Debug, Default)]
pub struct EvalConfig {
    /// Whether to evaluate candidates in parallel
    pub parallel: bool,
}

impl EvalConfig {
    /// Sequential evaluation
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Evaluation spread over the rayon thread pool
    pub fn parallel() -> Self {
        Self { parallel: true }
    }
}
