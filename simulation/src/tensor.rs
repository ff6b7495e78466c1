//! Population tensor - expected head counts by age, sex and type
//!
//! Band `a` holds everyone who turned `a` this year. The top band
//! (`MAX_AGE`) holds the cohort that reached the death threshold: it is never
//! counted as living and is dropped by the next shift.

use crate::components::{PersonType, Sex, MAX_AGE};
use crate::error::SimulationError;

/// Number of age bands, `0..=MAX_AGE`
pub const AGE_BANDS: usize = MAX_AGE as usize + 1;

/// Index of the band that is discarded on every shift
pub const TOP_BAND: usize = AGE_BANDS - 1;

/// Mass of one age band, indexed `[sex][type]`
pub type Cohort = [[f64; 2]; 2];

pub const EMPTY_COHORT: Cohort = [[0.0; 2]; 2];

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationTensor {
    bands: [Cohort; AGE_BANDS],
}

impl PopulationTensor {
    pub fn zeros() -> Self {
        Self {
            bands: [EMPTY_COHORT; AGE_BANDS],
        }
    }

    /// Add mass to one cell
    pub fn insert(
        &mut self,
        age: usize,
        sex: Sex,
        kind: PersonType,
        mass: f64,
    ) -> Result<(), SimulationError> {
        if age >= AGE_BANDS {
            return Err(SimulationError::AgeOutOfRange { age });
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(SimulationError::InvalidMass { age, mass });
        }
        self.bands[age][sex.index()][kind.index()] += mass;
        Ok(())
    }

    pub fn get(&self, age: usize, sex: Sex, kind: PersonType) -> f64 {
        self.bands
            .get(age)
            .map_or(0.0, |cohort| cohort[sex.index()][kind.index()])
    }

    pub fn cohort(&self, age: usize) -> Cohort {
        self.bands.get(age).copied().unwrap_or(EMPTY_COHORT)
    }

    /// Move every band up one year and seat `newborns` at age 0.
    ///
    /// Returns the mass that was in the top band before the shift; it leaves
    /// the tensor here and nowhere else.
    pub fn shift_ages(&mut self, newborns: Cohort) -> f64 {
        let discarded = cohort_mass(&self.bands[TOP_BAND]);
        self.bands[TOP_BAND] = EMPTY_COHORT;
        self.bands.copy_within(0..TOP_BAND, 1);
        self.bands[0] = newborns;
        discarded
    }

    /// Living mass per type, indexed like `PersonType::index`
    pub fn living_by_type(&self) -> [f64; 2] {
        let mut totals = [0.0; 2];
        for cohort in &self.bands[..TOP_BAND] {
            for by_type in cohort {
                totals[0] += by_type[0];
                totals[1] += by_type[1];
            }
        }
        totals
    }

    /// Everything in the tensor, including the top band
    pub fn total_mass(&self) -> f64 {
        self.bands.iter().map(cohort_mass).sum()
    }
}

impl Default for PopulationTensor {
    fn default() -> Self {
        Self::zeros()
    }
}

pub fn cohort_mass(cohort: &Cohort) -> f64 {
    cohort.iter().flatten().sum()
}
