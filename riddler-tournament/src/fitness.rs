//! Fitness evaluation for evolution
//!
//! Level 2 - Phase-level implementation

use rayon::prelude::*;
use serde::Serialize;

use riddler_core::{battle, Allocation, Outcome};

use crate::config::EvalConfig;

/// Battle record of one allocation against a whole population
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FitnessResult {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl FitnessResult {
    /// Fitness score (higher = better)
    pub fn fitness(&self) -> u32 {
        self.wins
    }

    /// Total battles fought
    pub fn total_battles(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Win rate (wins / total battles)
    pub fn win_rate(&self) -> f32 {
        let total = self.total_battles();
        if total == 0 {
            0.0
        } else {
            self.wins as f32 / total as f32
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Fight `candidate` against every member of `population` (Level 3 step).
///
/// The population normally contains the candidate itself; that battle is
/// always a tie.
pub fn evaluate_fitness(candidate: &Allocation, population: &[Allocation]) -> FitnessResult {
    let mut result = FitnessResult::default();
    for opponent in population {
        result.record(battle(candidate, opponent).outcome());
    }
    result
}

/// Evaluate every member of a population against the whole population
/// (Level 2 phase).
///
/// Results are in population order and identical whether or not
/// `config.parallel` is set.
pub fn evaluate_population(population: &[Allocation], config: &EvalConfig) -> Vec<FitnessResult> {
    if config.parallel {
        population
            .par_iter()
            .map(|candidate| evaluate_fitness(candidate, population))
            .collect()
    } else {
        population
            .iter()
            .map(|candidate| evaluate_fitness(candidate, population))
            .collect()
    }
}

/// Fitness scores for a whole population, in population order
pub fn fitness_scores(population: &[Allocation], config: &EvalConfig) -> Vec<u32> {
    evaluate_population(population, config)
        .iter()
        .map(FitnessResult::fitness)
        .collect()
}
