//! Integration tests for the riddler puzzle solvers
//!
//! Tests the full stack: allocations, battles, fitness, evolution, and the
//! `riddler` binary itself

use std::process::Command;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use riddler_core::{battle, Allocation, ConfigError, Outcome};
use riddler_evolve::{evolve, evolve_with_callback, EvolutionConfig};
use riddler_puzzles::{odd_fractions, search};
use riddler_tournament::{evaluate_population, EvalConfig};

// ============================================================================
// EVOLUTION SCENARIOS
// ============================================================================

#[test]
fn test_single_castle_everyone_ties() {
    let config = EvolutionConfig {
        population_size: 10,
        generations: 3,
        soldiers: 100,
        castles: 1,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let result = evolve(&config, &mut rng).unwrap();

    for alloc in &result.population {
        assert_eq!(alloc.troops(), &[100]);
    }
    for record in evaluate_population(&result.population, &EvalConfig::default()) {
        assert_eq!(record.ties, 10);
        assert_eq!(record.wins, 0);
    }
    // ties never count as wins
    assert_eq!(result.champion.troops(), &[100]);
    assert_eq!(result.champion_fitness, 0);
}

#[test]
fn test_small_population_shrinks_and_regrows() {
    let config = EvolutionConfig {
        population_size: 4,
        generations: 1,
        mutation_rate: 0.05,
        cull_rate: 0.5,
        soldiers: 6,
        castles: 3,
        parallel: false,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut survivors = Vec::new();

    let result =
        evolve_with_callback(&config, |stats| survivors.push(stats.survivors), &mut rng).unwrap();

    assert_eq!(survivors, vec![2]);
    assert_eq!(result.population.len(), 4);
    for alloc in &result.population {
        assert_eq!(alloc.soldiers(), 6);
        assert_eq!(alloc.castles(), 3);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = EvolutionConfig {
        population_size: 30,
        generations: 4,
        ..Default::default()
    };

    let a = evolve(&config, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let b = evolve(&config, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();

    assert_eq!(a.population, b.population);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.champion, b.champion);
}

#[test]
fn test_parallel_evolution_matches_sequential() {
    let sequential = EvolutionConfig {
        population_size: 30,
        generations: 3,
        ..Default::default()
    };
    let parallel = EvolutionConfig {
        parallel: true,
        ..sequential.clone()
    };

    let a = evolve(&sequential, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    let b = evolve(&parallel, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_champion_fitness_is_a_recount_of_wins() {
    let config = EvolutionConfig {
        population_size: 40,
        generations: 5,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = evolve(&config, &mut rng).unwrap();

    let wins = result
        .population
        .iter()
        .filter(|enemy| battle(&result.champion, enemy).outcome() == Outcome::Win)
        .count();

    assert_eq!(wins as u32, result.champion_fitness);
    assert!(result.fitness.iter().all(|&f| f <= result.champion_fitness));
}

#[test]
fn test_too_few_survivors_is_a_config_error() {
    let config = EvolutionConfig {
        population_size: 3,
        cull_rate: 0.7,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let err = evolve(&config, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TooFewSurvivors {
            population: 3,
            cull: 0.7,
            survivors: 1,
        }
    );
}

// ============================================================================
// PUZZLES
// ============================================================================

#[test]
fn test_pascal_first_128_rows() {
    let stats = odd_fractions(128);
    assert_eq!(stats.len(), 128);

    let last = stats.last().unwrap();
    assert_eq!((last.odd, last.total), (2187, 8256));
    assert!(stats.iter().all(|s| s.fraction > 0.0 && s.fraction <= 1.0));
}

#[test]
fn test_prime_pairs_for_nine() {
    let found = search(9);
    assert_eq!(found.linear.len(), 70);
    assert!(found.cyclic.is_empty());
    assert_eq!(found.linear[0], vec![1, 2, 3, 4, 7, 6, 5, 8, 9]);
}

// ============================================================================
// BINARY
// ============================================================================

fn riddler() -> Command {
    Command::new(env!("CARGO_BIN_EXE_riddler"))
}

#[test]
fn test_binary_evolve_reports_champion() {
    let output = riddler()
        .args(["--seed", "7", "evolve", "--population", "20", "--generations", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("in the final round."), "Unexpected output: {}", stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_binary_seeded_output_is_stable() {
    let run = || {
        riddler()
            .args(["--seed", "11", "evolve", "--population", "16", "--generations", "2"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_binary_json_output() {
    let output = riddler()
        .args(["--seed", "3", "evolve", "--population", "10", "--generations", "2", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let champion: Vec<u32> = serde_json::from_value(report["champion"].clone()).unwrap();
    assert_eq!(champion.iter().sum::<u32>(), 100);
    assert_eq!(champion.len(), 10);
    assert_eq!(report["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_binary_rejects_bad_cull() {
    let output = riddler()
        .args(["evolve", "--cull", "1.0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cull fraction"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_binary_rejects_unknown_arguments() {
    let output = riddler().args(["evolve", "--bogus"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_binary_prime_pairs() {
    let output = riddler().args(["prime-pairs", "--n", "4"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 4 unique prime pair permutations of length 4"));
    assert!(stdout.contains("Found 1 unique wrap around prime pair permutations of length 4"));
}

#[test]
fn test_binary_pascal() {
    let output = riddler().args(["pascal", "--n", "2"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["row 1: 1/1 odd (100.00%)", "row 2: 3/3 odd (100.00%)"]
    );
}

#[test]
fn test_allocation_json_is_a_plain_list() {
    let json = serde_json::to_string(&Allocation::new(vec![1, 2, 3])).unwrap();
    assert_eq!(json, "[1,2,3]");
}
