//! Evolution command - run the genetic algorithm for the castle game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_evolution_config(), run_evolution(), print_results()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use riddler_core::Allocation;
use riddler_evolve::{evolve_with_callback, EvolutionConfig, EvolutionResult, GenerationStats};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct EvolveArgs {
    /// Size of the population in each generation
    #[arg(long, default_value = "100")]
    pub population: usize,

    /// Number of generations to run
    #[arg(long, default_value = "10")]
    pub generations: usize,

    /// Chance (0.0-1.0) that a newborn warlord is mutated
    #[arg(long, default_value = "0.05")]
    pub mutation: f64,

    /// Fraction (0.0-1.0) of the population culled each generation
    #[arg(long, default_value = "0.2")]
    pub cull: f64,

    /// Soldiers each warlord distributes
    #[arg(long, default_value = "100")]
    pub soldiers: u32,

    /// Castles each warlord fights over
    #[arg(long, default_value = "10")]
    pub castles: usize,

    /// Evaluate fitness on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run evolution command
pub fn run(args: EvolveArgs, seed: Option<u64>) -> Result<()> {
    let config = build_evolution_config(&args);
    config
        .validate()
        .context("Invalid evolution configuration")?;

    let mut rng = crate::create_rng(seed);

    tracing::info!(
        "Starting evolution: pop={}, gen={}, soldiers={}, castles={}",
        config.population_size,
        config.generations,
        config.soldiers,
        config.castles
    );

    let result = run_evolution(&config, &mut rng)?;
    print_results(&result, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build evolution configuration from command arguments
fn build_evolution_config(args: &EvolveArgs) -> EvolutionConfig {
    EvolutionConfig {
        population_size: args.population,
        generations: args.generations,
        mutation_rate: args.mutation,
        cull_rate: args.cull,
        soldiers: args.soldiers,
        castles: args.castles,
        parallel: args.parallel,
    }
}

/// Run the evolution loop with progress logging
fn run_evolution(config: &EvolutionConfig, rng: &mut ChaCha8Rng) -> Result<EvolutionResult> {
    let callback = |stats: &GenerationStats| {
        tracing::info!(
            "Generation {}: best={}, avg={:.2}, survivors={}",
            stats.generation + 1,
            stats.best,
            stats.mean,
            stats.survivors
        );
    };

    evolve_with_callback(config, callback, rng).context("Evolution failed")
}

/// Print the champion, as text or JSON
fn print_results(result: &EvolutionResult, args: &EvolveArgs) -> Result<()> {
    if args.json {
        let report = EvolveReport {
            champion: &result.champion,
            fitness: result.champion_fitness,
            generations: result.history.len(),
            history: &result.history,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        println!("{}", format_champion(result));
    }

    Ok(())
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

#[derive(Serialize)]
struct EvolveReport<'a> {
    champion: &'a Allocation,
    fitness: u32,
    generations: usize,
    history: &'a [GenerationStats],
}

fn format_champion(result: &EvolutionResult) -> String {
    format!(
        "{} won with a score of {} in the final round.",
        result.champion, result.champion_fitness
    )
}
