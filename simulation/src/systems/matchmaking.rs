//! Matchmaking System
//!
//! Pairs the men and women who are at the fertile age this year.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::components::{Person, PersonType, Sex};

/// One man and one woman paired for this year's reproduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Couple {
    pub father: PersonType,
    pub mother: PersonType,
}

/// Shuffle each sex's eligible list and pair them position by position.
///
/// The longer list's surplus stays single this year, so the number of couples
/// is exactly `min(men, women)`.
pub fn matchmaking_system<R: Rng + ?Sized>(world: &World, rng: &mut R) -> Vec<Couple> {
    let mut men: Vec<PersonType> = Vec::new();
    let mut women: Vec<PersonType> = Vec::new();

    for (_, person) in world.query::<&Person>().iter() {
        if !person.is_fertile() {
            continue;
        }
        match person.sex() {
            Sex::Male => men.push(person.kind()),
            Sex::Female => women.push(person.kind()),
        }
    }

    men.shuffle(rng);
    women.shuffle(rng);

    men.into_iter()
        .zip(women)
        .map(|(father, mother)| Couple { father, mother })
        .collect()
}
