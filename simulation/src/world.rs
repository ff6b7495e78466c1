//! Agent engine - one entity per person

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::components::*;
use crate::engine::{InitialPopulation, Simulation};
use crate::error::SimulationError;
use crate::history::{History, HistoryRecord};
use crate::systems;

/// What happened during one agent year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    pub year: u32,
    pub deaths: u32,
    pub couples: u32,
    pub births: u32,
}

/// Individual-level engine. The world, rng and history belong to this
/// instance alone.
pub struct AgentSimulation<R = ChaCha8Rng> {
    world: World,
    rng: R,
    year: u32,
    history: History,
}

impl AgentSimulation<ChaCha8Rng> {
    /// Reproducible run from a fixed seed
    pub fn with_seed(
        initial_ordinary: i64,
        initial_bio: i64,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        let initial = InitialPopulation::new(initial_ordinary, initial_bio)?;
        Ok(Self::with_rng(initial, ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl<R: Rng> AgentSimulation<R> {
    /// Newborn cohort of each type, split as evenly as possible by sex
    pub fn with_rng(initial: InitialPopulation, rng: R) -> Self {
        let mut people = Vec::new();
        for (kind, count) in [
            (PersonType::Ordinary, initial.ordinary),
            (PersonType::Bio, initial.bio),
        ] {
            let (males, females) = InitialPopulation::split_by_sex(count);
            for (sex, n) in [(Sex::Male, males), (Sex::Female, females)] {
                people.extend((0..n).map(|_| Person::newborn(sex, kind)));
            }
        }
        Self::from_people(people, rng)
    }

    /// Start from a hand-built population, treated as year 0. People already
    /// past the death threshold are left out.
    pub fn from_people(people: impl IntoIterator<Item = Person>, rng: R) -> Self {
        let mut world = World::new();
        for person in people.into_iter().filter(Person::is_alive) {
            world.spawn((person,));
        }
        Self {
            world,
            rng,
            year: 0,
            history: History::new(),
        }
    }

    /// Number of living people
    pub fn population(&self) -> u32 {
        self.world.len()
    }

    /// Snapshot of everyone alive, in no particular order
    pub fn people(&self) -> Vec<Person> {
        self.world
            .query::<&Person>()
            .iter()
            .map(|(_, person)| *person)
            .collect()
    }

    /// Aging and death, then reproduction, then stats
    pub fn tick(&mut self) -> YearSummary {
        self.year += 1;

        systems::aging_system(&mut self.world);
        let deaths = systems::death_system(&mut self.world);

        let couples = systems::matchmaking_system(&self.world, &mut self.rng);
        let births = systems::birth_system(&mut self.world, &couples, &mut self.rng);

        let census = systems::census(&self.world);
        self.history
            .push(HistoryRecord::new(self.year, census.ordinary, census.bio));

        let summary = YearSummary {
            year: self.year,
            deaths,
            couples: couples.len() as u32,
            births,
        };
        debug!(
            year = summary.year,
            deaths = summary.deaths,
            couples = summary.couples,
            births = summary.births,
            population = self.world.len(),
            "agent step"
        );
        summary
    }
}

impl<R: Rng + SeedableRng> Simulation for AgentSimulation<R> {
    /// Seeds the rng from OS entropy; use `with_seed` for reproducible runs
    fn construct(initial_ordinary: i64, initial_bio: i64) -> Result<Self, SimulationError> {
        let initial = InitialPopulation::new(initial_ordinary, initial_bio)?;
        Ok(Self::with_rng(initial, R::from_entropy()))
    }

    fn name(&self) -> &'static str {
        "agent"
    }

    fn step(&mut self) {
        self.tick();
    }

    fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn turning_fertile(sex: Sex, kind: PersonType) -> Person {
        Person::with_age(sex, kind, FERTILE_AGE - 1)
    }

    #[test]
    fn test_construct_splits_sexes() {
        let sim = AgentSimulation::with_seed(5, 2, 1).unwrap();
        let people = sim.people();
        assert_eq!(people.len(), 7);
        assert!(people.iter().all(|p| p.age() == 0 && p.is_alive()));

        let count = |sex, kind| {
            people
                .iter()
                .filter(|p| p.sex() == sex && p.kind() == kind)
                .count()
        };
        assert_eq!(count(Sex::Male, PersonType::Ordinary), 2);
        assert_eq!(count(Sex::Female, PersonType::Ordinary), 3);
        assert_eq!(count(Sex::Male, PersonType::Bio), 1);
        assert_eq!(count(Sex::Female, PersonType::Bio), 1);
    }

    #[test]
    fn test_couples_and_births_are_exact() {
        // 7 men and 4 women turn 20 next year
        let people = (0..4)
            .map(|_| turning_fertile(Sex::Male, PersonType::Ordinary))
            .chain((0..3).map(|_| turning_fertile(Sex::Male, PersonType::Bio)))
            .chain((0..4).map(|_| turning_fertile(Sex::Female, PersonType::Bio)))
            .chain([Person::newborn(Sex::Female, PersonType::Ordinary)]);
        let mut sim = AgentSimulation::from_people(people, ChaCha8Rng::seed_from_u64(4));

        let summary = sim.tick();
        assert_eq!(summary.couples, 4);
        // every woman is Bio, so every couple is fertile
        assert_eq!(summary.births, 8);
        assert_eq!(summary.deaths, 0);

        let record = sim.history().last().copied().unwrap();
        assert_eq!(record.bio_count, 3 + 4 + 8);
        assert_eq!(record.ordinary_count, 4 + 1);
    }

    #[test]
    fn test_infertile_couples_count_but_bear_nothing() {
        let people = (0..3)
            .map(|_| turning_fertile(Sex::Male, PersonType::Bio))
            .chain((0..3).map(|_| turning_fertile(Sex::Female, PersonType::Ordinary)));
        let mut sim = AgentSimulation::from_people(people, ChaCha8Rng::seed_from_u64(4));

        let summary = sim.tick();
        assert_eq!(summary.couples, 3);
        assert_eq!(summary.births, 0);
    }

    #[test]
    fn test_nobody_outlives_max_age() {
        let mut sim = AgentSimulation::with_seed(200, 200, 42).unwrap();
        for _ in 0..(MAX_AGE * 3) {
            sim.tick();
            assert!(sim
                .people()
                .iter()
                .all(|p| p.is_alive() && p.age() < MAX_AGE));
        }
    }

    #[test]
    fn test_from_people_skips_the_dead() {
        let people = [
            Person::with_age(Sex::Male, PersonType::Bio, MAX_AGE),
            Person::newborn(Sex::Male, PersonType::Bio),
        ];
        let sim = AgentSimulation::from_people(people, ChaCha8Rng::seed_from_u64(0));
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = AgentSimulation::with_seed(500, 500, 77).unwrap();
        let mut b = AgentSimulation::with_seed(500, 500, 77).unwrap();
        a.run(150);
        b.run(150);
        assert_eq!(a.history().records(), b.history().records());
    }

    #[test]
    fn test_accepts_any_rng() {
        let initial = InitialPopulation::new(10, 10).unwrap();
        let mut sim = AgentSimulation::with_rng(initial, StdRng::seed_from_u64(1));
        sim.run(30);
        assert_eq!(sim.year(), 30);
        assert!(sim.population() > 0);
    }
}
