//! Configuration errors
//!
//! Every problem here is fatal and is reported before the first generation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("castles must be at least 1")]
    NoCastles,

    #[error("population must be at least 2 to pick two distinct parents, got {population}")]
    PopulationTooSmall { population: usize },

    #[error("mutation rate must be between 0 and 1, got {0}")]
    InvalidMutationRate(f64),

    #[error("cull fraction must be at least 0 and below 1, got {0}")]
    InvalidCullRate(f64),

    #[error(
        "culling {cull} of a population of {population} leaves {survivors} survivor(s), need at least 2 to breed"
    )]
    TooFewSurvivors {
        population: usize,
        cull: f64,
        survivors: usize,
    },
}
