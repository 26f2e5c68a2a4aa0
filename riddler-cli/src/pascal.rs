//! Pascal command - how odd is Pascal's triangle

use anyhow::{Context, Result};
use clap::Args;

use riddler_puzzles::{odd_fractions, RowStats};

#[derive(Args)]
pub struct PascalArgs {
    /// Number of rows to compute
    #[arg(long, default_value = "128")]
    pub n: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PascalArgs) -> Result<()> {
    tracing::info!("Counting odd entries in {} rows", args.n);
    let stats = odd_fractions(args.n);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        for row in &stats {
            println!("{}", format_row(row));
        }
    }

    Ok(())
}

fn format_row(stats: &RowStats) -> String {
    format!(
        "row {}: {}/{} odd ({:.2}%)",
        stats.row,
        stats.odd,
        stats.total,
        stats.fraction * 100.0
    )
}
