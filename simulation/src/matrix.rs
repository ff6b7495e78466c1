//! Matrix engine - deterministic expected-value projection
//!
//! Each year the engine works out the expected newborns of the cohort that
//! reaches `FERTILE_AGE`, shifts the tensor one band, then seats the
//! newborns at age 0. There is no randomness anywhere in this module.

use serde::Serialize;
use tracing::debug;

use crate::breeding::{self, CHILDREN_PER_COUPLE};
use crate::components::{PersonType, Sex, FERTILE_AGE};
use crate::engine::{InitialPopulation, Simulation};
use crate::error::SimulationError;
use crate::history::{History, HistoryRecord};
use crate::tensor::{cohort_mass, Cohort, PopulationTensor, EMPTY_COHORT};

/// Band read for reproduction before the shift. People in it turn
/// `FERTILE_AGE` during the year being simulated.
const BREEDING_BAND: usize = FERTILE_AGE as usize - 1;

/// Expected births from one cohort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewbornEstimate {
    /// Expected number of couples, `min(men, women)`
    pub couples: f64,
    /// Expected newborns per type, indexed like `PersonType::index`
    pub by_type: [f64; 2],
    /// Newborns split evenly by sex, ready for band 0
    pub cohort: Cohort,
}

impl NewbornEstimate {
    fn none() -> Self {
        Self {
            couples: 0.0,
            by_type: [0.0; 2],
            cohort: EMPTY_COHORT,
        }
    }

    pub fn total(&self) -> f64 {
        self.by_type[0] + self.by_type[1]
    }
}

/// Expected newborns for a fertile cohort under random pairing.
///
/// Couples are `min(men, women)`; men enter couples in proportion to their
/// type share and their partner's type follows the women's type shares.
pub fn expected_newborns(fertile: &Cohort) -> NewbornEstimate {
    let men = fertile[Sex::Male.index()];
    let women = fertile[Sex::Female.index()];
    let total_men = men[0] + men[1];
    let total_women = women[0] + women[1];

    if !(total_men > 0.0 && total_women > 0.0) {
        return NewbornEstimate::none();
    }

    let couples = total_men.min(total_women);
    let active_men = men.map(|mass| couples * mass / total_men);
    let partner_share = women.map(|mass| mass / total_women);
    let litter = f64::from(CHILDREN_PER_COUPLE);

    let mut by_type = [0.0; 2];
    for father in PersonType::ALL {
        for mother in PersonType::ALL {
            if let Some(child) = breeding::offspring(father, mother) {
                by_type[child.index()] +=
                    active_men[father.index()] * partner_share[mother.index()] * litter;
            }
        }
    }

    let mut cohort = EMPTY_COHORT;
    for sex in Sex::ALL {
        for kind in PersonType::ALL {
            cohort[sex.index()][kind.index()] = by_type[kind.index()] / 2.0;
        }
    }

    NewbornEstimate {
        couples,
        by_type,
        cohort,
    }
}

/// Summary of one matrix step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixYearSummary {
    pub year: u32,
    pub couples: f64,
    pub newborns: f64,
    pub discarded: f64,
}

pub struct MatrixSimulation {
    population: PopulationTensor,
    year: u32,
    history: History,
}

impl MatrixSimulation {
    /// Newborn cohort split evenly between the sexes
    pub fn new(initial: InitialPopulation) -> Self {
        let mut population = PopulationTensor::zeros();
        for (kind, count) in [
            (PersonType::Ordinary, initial.ordinary),
            (PersonType::Bio, initial.bio),
        ] {
            let half = count as f64 / 2.0;
            for sex in Sex::ALL {
                // half of a u64 is finite and non-negative
                let _ = population.insert(0, sex, kind, half);
            }
        }
        Self::from_tensor(population)
    }

    /// Start from an arbitrary tensor, treated as year 0
    pub fn from_tensor(population: PopulationTensor) -> Self {
        Self {
            population,
            year: 0,
            history: History::new(),
        }
    }

    pub fn population(&self) -> &PopulationTensor {
        &self.population
    }

    /// Reproduction, then aging, then stats
    pub fn tick(&mut self) -> MatrixYearSummary {
        self.year += 1;

        let newborns = expected_newborns(&self.population.cohort(BREEDING_BAND));
        let discarded = self.population.shift_ages(newborns.cohort);
        self.record_stats();

        let summary = MatrixYearSummary {
            year: self.year,
            couples: newborns.couples,
            newborns: cohort_mass(&newborns.cohort),
            discarded,
        };
        debug!(
            year = summary.year,
            couples = summary.couples,
            newborns = summary.newborns,
            discarded = summary.discarded,
            "matrix step"
        );
        summary
    }

    fn record_stats(&mut self) {
        let [ordinary, bio] = self.population.living_by_type();
        // float -> int casts saturate, so huge masses cannot wrap
        self.history
            .push(HistoryRecord::new(self.year, ordinary as u64, bio as u64));
    }
}

impl Simulation for MatrixSimulation {
    fn construct(initial_ordinary: i64, initial_bio: i64) -> Result<Self, SimulationError> {
        Ok(Self::new(InitialPopulation::new(initial_ordinary, initial_bio)?))
    }

    fn name(&self) -> &'static str {
        "matrix"
    }

    fn step(&mut self) {
        self.tick();
    }

    fn history(&self) -> &History {
        &self.history
    }
}
