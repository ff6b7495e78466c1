//! Census - head count by type

use hecs::World;
use crate::components::{Person, PersonType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub ordinary: u64,
    pub bio: u64,
}

/// Count living people by type
pub fn census(world: &World) -> Census {
    let mut counts = Census::default();
    for (_, person) in world.query::<&Person>().iter() {
        if !person.is_alive() {
            continue;
        }
        match person.kind() {
            PersonType::Ordinary => counts.ordinary += 1,
            PersonType::Bio => counts.bio += 1,
        }
    }
    counts
}
