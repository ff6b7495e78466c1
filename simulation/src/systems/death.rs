//! Death System
//!
//! Removes everyone who reached the death threshold this year.

use hecs::World;
use crate::components::Person;

/// Despawn dead people. Returns the number removed.
pub fn death_system(world: &mut World) -> u32 {
    let dead: Vec<hecs::Entity> = world
        .query::<&Person>()
        .iter()
        .filter(|(_, person)| !person.is_alive())
        .map(|(entity, _)| entity)
        .collect();

    let count = dead.len() as u32;
    for entity in dead {
        let _ = world.despawn(entity);
    }
    count
}
