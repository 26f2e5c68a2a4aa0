//! Riddler Tournament - Fitness evaluation through round-robin battles
//!
//! Every allocation fights every member of its population, itself
//! included, and its fitness is the number of battles it wins.
//!
//! ## Architecture
//!
//! - Level 2: evaluate_population (phase)
//! - Level 3: evaluate_fitness (step)
//! - Level 4: configuration

mod config;
mod fitness;

pub use config::EvalConfig;
pub use fitness::{evaluate_fitness, evaluate_population, fitness_scores, FitnessResult};
