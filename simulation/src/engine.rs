//! Engine contract shared by the agent and matrix models

use serde::Serialize;

use crate::error::SimulationError;
use crate::history::{History, HistoryRecord};

/// Validated starting population, all newborns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitialPopulation {
    pub ordinary: u64,
    pub bio: u64,
}

impl InitialPopulation {
    pub fn new(ordinary: i64, bio: i64) -> Result<Self, SimulationError> {
        Ok(Self {
            ordinary: non_negative("initial_ordinary", ordinary)?,
            bio: non_negative("initial_bio", bio)?,
        })
    }

    /// Split a count into (male, female), giving any odd one out to the females
    pub fn split_by_sex(count: u64) -> (u64, u64) {
        let males = count / 2;
        (males, count - males)
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64, SimulationError> {
    u64::try_from(value).map_err(|_| SimulationError::InvalidArgument { name, value })
}

/// Yearly projection engine.
///
/// Implementations own their population and history outright; a step appends
/// exactly one record.
pub trait Simulation {
    /// Build an engine seeded with a newborn cohort of each type
    fn construct(initial_ordinary: i64, initial_bio: i64) -> Result<Self, SimulationError>
    where
        Self: Sized;

    fn name(&self) -> &'static str;

    /// Advance exactly one year
    fn step(&mut self);

    fn history(&self) -> &History;

    fn run(&mut self, years: u32) {
        for _ in 0..years {
            self.step();
        }
    }

    /// Last simulated year, 0 before the first step
    fn year(&self) -> u32 {
        self.history().last().map_or(0, |r| r.year)
    }

    fn latest(&self) -> Option<&HistoryRecord> {
        self.history().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Person, PersonType, Sex, MAX_AGE};
    use crate::matrix::MatrixSimulation;
    use crate::tensor::PopulationTensor;
    use crate::world::AgentSimulation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Bio men with Ordinary women: every couple is infertile
    fn barren_agents(per_sex: usize, seed: u64) -> AgentSimulation {
        let people = (0..per_sex)
            .map(|_| Person::newborn(Sex::Male, PersonType::Bio))
            .chain((0..per_sex).map(|_| Person::newborn(Sex::Female, PersonType::Ordinary)));
        AgentSimulation::from_people(people, ChaCha8Rng::seed_from_u64(seed))
    }

    fn barren_tensor(per_sex: f64) -> MatrixSimulation {
        let mut tensor = PopulationTensor::zeros();
        tensor.insert(0, Sex::Male, PersonType::Bio, per_sex).unwrap();
        tensor.insert(0, Sex::Female, PersonType::Ordinary, per_sex).unwrap();
        MatrixSimulation::from_tensor(tensor)
    }

    fn assert_records_consistent<S: Simulation>(sim: &S, years: u32) {
        let history = sim.history();
        assert_eq!(history.len(), years as usize);
        for (i, record) in history.iter().enumerate() {
            assert_eq!(record.year, i as u32 + 1);
            assert_eq!(record.ordinary_count + record.bio_count, record.total_count);
        }
    }

    fn run_engine<S: Simulation>(years: u32) -> S {
        let mut sim = S::construct(300, 300).unwrap();
        assert_eq!(sim.year(), 0);
        assert!(sim.latest().is_none());
        sim.run(years);
        sim
    }

    #[test]
    fn test_negative_arguments_fail_fast() {
        let err = InitialPopulation::new(-1, 10).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument { name: "initial_ordinary", value: -1 }
        ));
        let agent: Result<AgentSimulation, _> = AgentSimulation::construct(5, -3);
        assert!(agent.is_err());
        assert!(MatrixSimulation::construct(-5, 3).is_err());
    }

    #[test]
    fn test_split_by_sex() {
        assert_eq!(InitialPopulation::split_by_sex(0), (0, 0));
        assert_eq!(InitialPopulation::split_by_sex(2), (1, 1));
        assert_eq!(InitialPopulation::split_by_sex(7), (3, 4));
    }

    #[test]
    fn test_both_engines_record_every_year() {
        let agent: AgentSimulation = run_engine(120);
        assert_records_consistent(&agent, 120);
        assert_eq!(agent.year(), 120);

        let matrix: MatrixSimulation = run_engine(120);
        assert_records_consistent(&matrix, 120);
        assert_eq!(matrix.year(), 120);
    }

    #[test]
    fn test_zero_years_is_a_no_op() {
        let mut sim = MatrixSimulation::construct(10, 10).unwrap();
        sim.run(0);
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_empty_population_is_quiescent() {
        let mut agent = AgentSimulation::with_seed(0, 0, 1).unwrap();
        let mut matrix = MatrixSimulation::construct(0, 0).unwrap();
        agent.run(50);
        matrix.run(50);
        for sim in [&agent as &dyn Simulation, &matrix] {
            assert_eq!(sim.history().len(), 50);
            assert!(sim.history().iter().all(|r| r.total_count == 0));
        }
    }

    #[test]
    fn test_pure_ordinary_line() {
        // One man and one woman: one couple at 20, two Ordinary children
        let mut agent = AgentSimulation::with_seed(2, 0, 9).unwrap();
        let mut matrix = MatrixSimulation::construct(2, 0).unwrap();
        agent.run(21);
        matrix.run(21);

        for sim in [&agent as &dyn Simulation, &matrix] {
            let history = sim.history();
            assert_eq!(history.year(19).unwrap().ordinary_count, 2, "{}", sim.name());
            assert_eq!(history.year(20).unwrap().ordinary_count, 4, "{}", sim.name());
            let year_21 = history.year(21).unwrap();
            assert_eq!(year_21.ordinary_count, 4, "{}", sim.name());
            assert_eq!(year_21.bio_count, 0);
        }
    }

    #[test]
    fn test_cross_engine_convergence() {
        let years = 100;
        let mut agent = AgentSimulation::with_seed(10_000, 10_000, 2024).unwrap();
        let mut matrix = MatrixSimulation::construct(10_000, 10_000).unwrap();
        agent.run(years);
        matrix.run(years);

        let agent_total = agent.latest().unwrap().total_count as f64;
        let matrix_total = matrix.latest().unwrap().total_count as f64;
        let relative = (agent_total - matrix_total).abs() / matrix_total;
        assert!(
            relative < 0.05,
            "agent {agent_total} vs matrix {matrix_total} ({relative:.3})"
        );
    }

    #[test]
    fn test_first_generation_agrees() {
        // Before any reproduction both engines carry the initial cohort intact
        let mut agent = AgentSimulation::with_seed(1_000, 1_000, 5).unwrap();
        let mut matrix = MatrixSimulation::construct(1_000, 1_000).unwrap();
        agent.run(19);
        matrix.run(19);
        assert_eq!(agent.history().records(), matrix.history().records());
    }

    #[test]
    fn test_extinction_and_lifespan_boundary() {
        // The initial cohort is the whole population for its entire life
        let mut agent = barren_agents(40, 9);
        let mut matrix = barren_tensor(40.0);
        agent.run(MAX_AGE + 5);
        matrix.run(MAX_AGE + 5);

        for sim in [&agent as &dyn Simulation, &matrix] {
            let history = sim.history();
            assert_eq!(history.year(MAX_AGE - 1).unwrap().total_count, 80, "{}", sim.name());
            assert_eq!(history.year(MAX_AGE).unwrap().total_count, 0, "{}", sim.name());
            assert!(history.iter().all(|r| r.total_count <= 80));
            assert!(history.iter().skip(MAX_AGE as usize).all(|r| r.total_count == 0));
        }
    }
}
