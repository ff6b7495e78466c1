//! Birth System
//!
//! Turns this year's couples into newborns.

use hecs::World;
use rand::Rng;
use crate::breeding::{self, CHILDREN_PER_COUPLE};
use crate::components::{Person, Sex};
use crate::systems::Couple;

/// Spawn the children of every fertile couple, each with a random sex.
/// Returns the number of births.
pub fn birth_system<R: Rng + ?Sized>(world: &mut World, couples: &[Couple], rng: &mut R) -> u32 {
    let mut births = 0;

    for couple in couples {
        let Some(kind) = breeding::offspring(couple.father, couple.mother) else {
            continue;
        };
        for _ in 0..CHILDREN_PER_COUPLE {
            let sex = if rng.gen::<bool>() { Sex::Male } else { Sex::Female };
            world.spawn((Person::newborn(sex, kind),));
            births += 1;
        }
    }

    births
}
