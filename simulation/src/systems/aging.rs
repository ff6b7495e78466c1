//! Aging System - one year older for everyone alive

use hecs::World;
use crate::components::Person;

/// Advance every living person by one year
pub fn aging_system(world: &mut World) {
    for (_, person) in world.query_mut::<&mut Person>() {
        person.age_up();
    }
}
