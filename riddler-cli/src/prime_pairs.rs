//! Prime pairs command - permutations whose neighbours sum to primes

use anyhow::{Context, Result};
use clap::Args;

use riddler_puzzles::search;

#[derive(Args)]
pub struct PrimePairsArgs {
    /// Search permutations of 1..=n
    #[arg(long, default_value = "9", value_parser = clap::value_parser!(u32).range(1..))]
    pub n: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PrimePairsArgs) -> Result<()> {
    tracing::info!("Searching prime pair permutations of length {}", args.n);
    let found = search(args.n);
    tracing::debug!(
        linear = found.linear.len(),
        cyclic = found.cyclic.len(),
        "search finished"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&found).context("Failed to serialize results")?;
        println!("{}", json);
        return Ok(());
    }

    for seq in &found.linear {
        println!("{:?}", seq);
    }
    println!(
        "Found {} unique prime pair permutations of length {}",
        found.linear.len(),
        args.n
    );

    for seq in &found.cyclic {
        println!("{:?}", seq);
    }
    println!(
        "Found {} unique wrap around prime pair permutations of length {}",
        found.cyclic.len(),
        args.n
    );

    Ok(())
}
