//! Benchmark harness - times both engines on the same starting population

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::engine::{InitialPopulation, Simulation};
use crate::error::SimulationError;
use crate::history::HistoryRecord;
use crate::matrix::MatrixSimulation;
use crate::world::AgentSimulation;

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub engine: &'static str,
    pub total_ms: f64,
    pub per_year_ms: f64,
    pub final_record: Option<HistoryRecord>,
    /// Resident memory after the run, when the platform reports it
    pub memory_bytes: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Initial count of each type
    pub population: u64,
    pub years: u32,
    pub agent: BenchmarkResult,
    pub matrix: BenchmarkResult,
    /// Agent time over matrix time, 0 when the matrix run was too fast to time
    pub speedup: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub comparisons: Vec<Comparison>,
}

/// Run an already-built engine for `years` and time it
pub fn run_benchmark<S: Simulation>(mut sim: S, years: u32) -> BenchmarkResult {
    let start = Instant::now();
    sim.run(years);
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    BenchmarkResult {
        engine: sim.name(),
        total_ms,
        per_year_ms: if years > 0 { total_ms / years as f64 } else { 0.0 },
        final_record: sim.latest().copied(),
        memory_bytes: memory_stats::memory_stats().map(|stats| stats.physical_mem as u64),
    }
}

/// Benchmark both engines from `size` Ordinary and `size` Bio newborns
pub fn compare(size: i64, years: u32, seed: Option<u64>) -> Result<Comparison, SimulationError> {
    let initial = InitialPopulation::new(size, size)?;
    info!(population = size, years, "benchmarking");

    let agent: AgentSimulation = match seed {
        Some(seed) => AgentSimulation::with_seed(size, size, seed)?,
        None => AgentSimulation::construct(size, size)?,
    };
    let agent = run_benchmark(agent, years);
    let matrix = run_benchmark(MatrixSimulation::new(initial), years);

    let speedup = if matrix.total_ms > 0.0 {
        agent.total_ms / matrix.total_ms
    } else {
        0.0
    };

    Ok(Comparison {
        population: initial.ordinary,
        years,
        agent,
        matrix,
        speedup,
    })
}

/// One line per engine, as printed after each benchmark
pub fn describe(result: &BenchmarkResult) -> String {
    let totals = result.final_record.map_or_else(
        || "no years simulated".to_string(),
        |r| format!("Final Pop: {} (Ord: {}, Bio: {})", r.total_count, r.ordinary_count, r.bio_count),
    );
    format!("{:<7} {:>10.4}s  {}", result.engine, result.total_ms / 1000.0, totals)
}

/// Summary table over every comparison
pub fn summary_table(comparisons: &[Comparison]) -> String {
    let mut table = format!(
        "{:>10} {:>12} {:>12} {:>9}\n",
        "population", "agent_time", "matrix_time", "speedup"
    );
    for c in comparisons {
        table.push_str(&format!(
            "{:>10} {:>12.4} {:>12.4} {:>9.2}\n",
            c.population,
            c.agent.total_ms / 1000.0,
            c.matrix.total_ms / 1000.0,
            c.speedup
        ));
    }
    table
}
