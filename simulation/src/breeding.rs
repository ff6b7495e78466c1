//! Breeding rules shared by both engines
//!
//! The rule is not symmetric in parent role: an Ordinary father with a Bio
//! mother has Bio children, a Bio father with an Ordinary mother has none.

use crate::components::PersonType;

/// Children born to every fertile couple
pub const CHILDREN_PER_COUPLE: u32 = 2;

/// Child type for a (father, mother) pairing, `None` when infertile
pub const fn offspring(father: PersonType, mother: PersonType) -> Option<PersonType> {
    match (father, mother) {
        (PersonType::Ordinary, PersonType::Ordinary) => Some(PersonType::Ordinary),
        (PersonType::Ordinary, PersonType::Bio) => Some(PersonType::Bio),
        (PersonType::Bio, PersonType::Bio) => Some(PersonType::Bio),
        (PersonType::Bio, PersonType::Ordinary) => None,
    }
}

/// Number of children a couple has this year
pub const fn litter_size(father: PersonType, mother: PersonType) -> u32 {
    match offspring(father, mother) {
        Some(_) => CHILDREN_PER_COUPLE,
        None => 0,
    }
}
