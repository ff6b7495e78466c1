//! Components for population entities
//!
//! A `Person` is spawned as a single ECS component by the agent engine. The
//! same `Sex` and `PersonType` enums index the matrix engine's tensor axes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle Constants
// ============================================================================

/// The single age at which people reproduce
pub const FERTILE_AGE: u32 = 20;

/// Age at which a person dies
pub const MAX_AGE: u32 = 80;

// ============================================================================
// Person Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Position on the tensor's sex axis
    pub const fn index(self) -> usize {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonType {
    Ordinary,
    Bio,
}

impl PersonType {
    pub const ALL: [PersonType; 2] = [PersonType::Ordinary, PersonType::Bio];

    /// Position on the tensor's type axis
    pub const fn index(self) -> usize {
        match self {
            PersonType::Ordinary => 0,
            PersonType::Bio => 1,
        }
    }
}

/// One individual. Sex and type are fixed at birth; only age and the alive
/// flag change, and `alive` is false exactly when `age >= MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    sex: Sex,
    kind: PersonType,
    age: u32,
    alive: bool,
}

impl Person {
    pub fn newborn(sex: Sex, kind: PersonType) -> Self {
        Self::with_age(sex, kind, 0)
    }

    /// Build a person of a given age, clamped to the death threshold
    pub fn with_age(sex: Sex, kind: PersonType, age: u32) -> Self {
        let age = age.min(MAX_AGE);
        Self {
            sex,
            kind,
            age,
            alive: age < MAX_AGE,
        }
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn kind(&self) -> PersonType {
        self.kind
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_fertile(&self) -> bool {
        self.alive && self.age == FERTILE_AGE
    }

    /// Advance one year, dying on reaching `MAX_AGE`
    pub fn age_up(&mut self) {
        if !self.alive {
            return;
        }
        self.age += 1;
        if self.age >= MAX_AGE {
            self.alive = false;
        }
    }
}
