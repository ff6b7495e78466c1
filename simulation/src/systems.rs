//! Agent systems - run over the ECS world once per simulated year
//!
//! Order within a year: aging, death, matchmaking, birth, census.

pub mod aging;
pub mod birth;
pub mod census;
pub mod death;
pub mod matchmaking;

pub use aging::aging_system;
pub use birth::birth_system;
pub use census::{census, Census};
pub use death::death_system;
pub use matchmaking::{matchmaking_system, Couple};
