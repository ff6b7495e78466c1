//! Population Projection Benchmark
//!
//! Times the agent and matrix engines on the same starting populations.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use simulation::benchmark::{self, BenchmarkReport};
use simulation::config::BenchmarkConfig;
use simulation::ensemble;
use simulation::InitialPopulation;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(author, version, about = "Agent vs matrix population benchmark")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial count of each type, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    sizes: Option<Vec<i64>>,

    /// Years to simulate
    #[arg(long)]
    years: Option<u32>,

    /// Seed for the agent engine
    #[arg(long)]
    seed: Option<u64>,

    /// Average this many agent replicates against the matrix projection
    #[arg(long)]
    replicates: Option<usize>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log every simulated year
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<BenchmarkConfig> {
        let mut config = match &self.config {
            Some(path) => BenchmarkConfig::load_from_path(path)?,
            None => BenchmarkConfig::default(),
        };
        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(years) = self.years {
            config.years = years;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(replicates) = self.replicates {
            config.replicates = replicates;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.into_config()?;
    info!(
        "Benchmarking sizes {:?} over {} years...",
        config.sizes, config.years
    );

    let mut comparisons = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let comparison = benchmark::compare(size, config.years, config.seed)?;
        if !json {
            println!("\n--- Initial Population: {} of each type ---", size);
            println!("{}", benchmark::describe(&comparison.agent));
            println!("{}", benchmark::describe(&comparison.matrix));
            println!("Speedup: {:.2}x", comparison.speedup);
        }

        if config.replicates > 0 {
            let initial = InitialPopulation::new(size, size)?;
            let seed = config.seed.unwrap_or_default();
            let ensemble = ensemble::run_replicates(initial, config.years, seed, config.replicates);
            if let (Some(mean), Some(matrix)) = (ensemble.last(), comparison.matrix.final_record) {
                info!(
                    "Ensemble of {}: mean total {:.1} vs matrix {}",
                    config.replicates, mean.mean_total, matrix.total_count
                );
            }
        }
        comparisons.push(comparison);
    }

    if json {
        let report = BenchmarkReport {
            generated_at: Utc::now(),
            comparisons,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n--- Summary ---");
        print!("{}", benchmark::summary_table(&comparisons));
    }

    Ok(())
}
