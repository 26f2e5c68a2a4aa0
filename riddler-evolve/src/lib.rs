//! Riddler Evolution - Genetic algorithm for the castle game
//!
//! This crate provides the warlord search:
//! - Population management
//! - Selection (culling the weakest fraction)
//! - Mutation operators
//! - Crossover operators
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: evolve_with_callback() - orchestration
//! - Level 2: initial_population(), cull(), reproduce()
//! - Level 3: crossover(), swap_mutate(), select_parents()
//! - Level 4: configuration and validation

pub mod crossover;
pub mod mutation;
pub mod selection;

use std::fmt;

use rand::Rng;
use serde::Serialize;

use riddler_core::{Allocation, ConfigError};
use riddler_tournament::{fitness_scores, EvalConfig};

pub use crossover::crossover;
pub use mutation::{maybe_mutate, swap_mutate};
pub use selection::{ascending_order, cull, select_parents};

// ============================================================================
// CONFIGURATION (Level 4)
// ============================================================================

/// Evolution configuration
#[derive(Clone, Debug)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Chance that a freshly bred child gets a swap mutation
    pub mutation_rate: f64,
    /// Fraction of the population discarded each generation
    pub cull_rate: f64,
    pub soldiers: u32,
    pub castles: usize,
    /// Evaluate fitness on the rayon thread pool
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 10,
            mutation_rate: 0.05,
            cull_rate: 0.2,
            soldiers: 100,
            castles: 10,
            parallel: false,
        }
    }
}

impl EvolutionConfig {
    /// Check that the configuration can run to completion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.castles == 0 {
            return Err(ConfigError::NoCastles);
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                population: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if !(0.0..1.0).contains(&self.cull_rate) {
            return Err(ConfigError::InvalidCullRate(self.cull_rate));
        }

        let survivors = self.survivor_count();
        if survivors < 2 {
            return Err(ConfigError::TooFewSurvivors {
                population: self.population_size,
                cull: self.cull_rate,
                survivors,
            });
        }

        Ok(())
    }

    /// Candidates discarded each generation
    pub fn cull_count(&self) -> usize {
        ((self.population_size as f64) * self.cull_rate).floor() as usize
    }

    /// Candidates left to breed after culling
    pub fn survivor_count(&self) -> usize {
        self.population_size.saturating_sub(self.cull_count())
    }

    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            parallel: self.parallel,
        }
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// Lifecycle of an evolution run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    Evaluating,
    Culling,
    Reproducing,
    Terminated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initialized => "initialized",
            Phase::Evaluating => "evaluating",
            Phase::Culling => "culling",
            Phase::Reproducing => "reproducing",
            Phase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Summary of one generation, taken after evaluation and culling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Zero-based generation index
    pub generation: usize,
    pub best: u32,
    pub mean: f64,
    pub survivors: usize,
}

impl GenerationStats {
    fn new(generation: usize, fitness: &[u32], survivors: usize) -> Self {
        let best = fitness.iter().copied().max().unwrap_or(0);
        let mean = if fitness.is_empty() {
            0.0
        } else {
            fitness.iter().map(|&f| f64::from(f)).sum::<f64>() / fitness.len() as f64
        };

        Self {
            generation,
            best,
            mean,
            survivors,
        }
    }
}

/// Outcome of an evolution run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvolutionResult {
    pub champion: Allocation,
    pub champion_fitness: u32,
    /// Final population, best first
    pub population: Vec<Allocation>,
    /// Fitness of each member of `population`
    pub fitness: Vec<u32>,
    pub history: Vec<GenerationStats>,
}

impl EvolutionResult {
    fn from_final(
        population: Vec<Allocation>,
        fitness: Vec<u32>,
        history: Vec<GenerationStats>,
    ) -> Self {
        let mut slots: Vec<Option<Allocation>> = population.into_iter().map(Some).collect();
        let (ranked, ranked_fitness): (Vec<Allocation>, Vec<u32>) = ascending_order(&fitness)
            .into_iter()
            .rev()
            .filter_map(|idx| slots[idx].take().map(|alloc| (alloc, fitness[idx])))
            .unzip();

        Self {
            // validation guarantees a population of at least two
            champion: ranked[0].clone(),
            champion_fitness: ranked_fitness[0],
            population: ranked,
            fitness: ranked_fitness,
            history,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Evolve a population of allocations and return the fittest.
pub fn evolve<R: Rng>(config: &EvolutionConfig, rng: &mut R) -> Result<EvolutionResult, ConfigError> {
    evolve_with_callback(config, |_| {}, rng)
}

/// Evolve a population, calling `callback` once per generation.
///
/// Each generation evaluates every candidate against the whole
/// population, culls the weakest fraction, and breeds survivors until the
/// population is full again. After the last generation the population is
/// evaluated once more and the fittest candidate is reported; among equals
/// the one ranked last by the stable ascending sort wins.
pub fn evolve_with_callback<F, R>(
    config: &EvolutionConfig,
    mut callback: F,
    rng: &mut R,
) -> Result<EvolutionResult, ConfigError>
where
    F: FnMut(&GenerationStats),
    R: Rng,
{
    config.validate()?;
    let eval_config = config.eval_config();

    let mut population = initial_population(config, rng);
    tracing::trace!(phase = %Phase::Initialized, size = population.len());

    let mut history = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        tracing::trace!(phase = %Phase::Evaluating, generation);
        let fitness = fitness_scores(&population, &eval_config);

        tracing::trace!(phase = %Phase::Culling, generation);
        let survivors = cull(population, &fitness, config.cull_count());

        let stats = GenerationStats::new(generation, &fitness, survivors.len());
        tracing::debug!(
            generation,
            best = stats.best,
            mean = stats.mean,
            survivors = stats.survivors,
            "generation evaluated"
        );
        callback(&stats);
        history.push(stats);

        tracing::trace!(phase = %Phase::Reproducing, generation);
        population = reproduce(survivors, config, rng);
    }

    tracing::trace!(phase = %Phase::Evaluating, "final evaluation");
    let fitness = fitness_scores(&population, &eval_config);
    tracing::trace!(phase = %Phase::Terminated);

    Ok(EvolutionResult::from_final(population, fitness, history))
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Generate `population_size` random allocations
pub fn initial_population<R: Rng>(config: &EvolutionConfig, rng: &mut R) -> Vec<Allocation> {
    (0..config.population_size)
        .map(|_| Allocation::random(config.soldiers, config.castles, rng))
        .collect()
}

/// Breed survivors until the population is back to full size.
///
/// Parents are always drawn from the survivors, never from children born
/// in the same generation.
pub fn reproduce<R: Rng>(
    survivors: Vec<Allocation>,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Vec<Allocation> {
    let parent_count = survivors.len();
    let mut population = survivors;
    population.reserve(config.population_size.saturating_sub(parent_count));

    let mut mutations = 0usize;
    while population.len() < config.population_size {
        let (a, b) = select_parents(&population[..parent_count], rng);
        let mut child = crossover(a, b, rng);
        if maybe_mutate(&mut child, config.mutation_rate, rng) {
            mutations += 1;
        }
        population.push(child);
    }

    tracing::trace!(
        children = population.len() - parent_count,
        mutations,
        "population refilled"
    );

    population
}
