//! Riddler CLI - Command-line interface
//!
//! Commands:
//! - evolve: Search for a strong castle allocation with a genetic algorithm
//! - pascal: Report how much of Pascal's triangle is odd
//! - prime-pairs: List permutations whose neighbours sum to primes

mod evolve;
mod pascal;
mod prime_pairs;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "riddler")]
#[command(about = "Recreational math puzzle solvers")]
struct Cli {
    /// Seed for the random number generator (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve the strongest warlord for the castle game
    Evolve(evolve::EvolveArgs),
    /// Cumulative fraction of odd entries in Pascal's triangle
    Pascal(pascal::PascalArgs),
    /// Permutations of 1..=n whose adjacent sums are prime
    PrimePairs(prime_pairs::PrimePairsArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evolve(args) => evolve::run(args, cli.seed),
        Commands::Pascal(args) => pascal::run(args),
        Commands::PrimePairs(args) => prime_pairs::run(args),
    }
}

/// Log to stderr so stdout only carries results
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Seeded RNG for reproducible runs, entropy-seeded otherwise
pub(crate) fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            tracing::debug!("Using seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}
