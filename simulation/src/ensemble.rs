//! Replicate ensemble - many seeded agent runs averaged year by year
//!
//! Replicates are independent engines run in parallel; nothing is shared
//! between them. The mean history approximates what the matrix engine
//! computes in closed form.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::engine::{InitialPopulation, Simulation};
use crate::world::AgentSimulation;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnsembleYear {
    pub year: u32,
    pub mean_ordinary: f64,
    pub mean_bio: f64,
    pub mean_total: f64,
}

/// Run `replicates` agent engines seeded `base_seed, base_seed + 1, ...`
/// and average their histories. Empty when `replicates` is 0.
pub fn run_replicates(
    initial: InitialPopulation,
    years: u32,
    base_seed: u64,
    replicates: usize,
) -> Vec<EnsembleYear> {
    if replicates == 0 {
        return Vec::new();
    }
    info!(replicates, years, "running agent replicates");

    let histories: Vec<_> = (0..replicates)
        .into_par_iter()
        .map(|offset| {
            let rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(offset as u64));
            let mut sim = AgentSimulation::with_rng(initial, rng);
            sim.run(years);
            sim.history().records().to_vec()
        })
        .collect();

    let n = replicates as f64;
    (0..years as usize)
        .map(|i| {
            let (mut ordinary, mut bio) = (0.0, 0.0);
            for history in &histories {
                ordinary += history[i].ordinary_count as f64;
                bio += history[i].bio_count as f64;
            }
            EnsembleYear {
                year: i as u32 + 1,
                mean_ordinary: ordinary / n,
                mean_bio: bio / n,
                mean_total: (ordinary + bio) / n,
            }
        })
        .collect()
}
