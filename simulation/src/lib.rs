//! Demographic projection engines
//!
//! Two models of the same Ordinary/Bio population: an agent engine that
//! simulates every person on an ECS world, and a matrix engine that projects
//! expected cohort counts. Both share one breeding policy and implement the
//! `Simulation` trait.

pub mod benchmark;
pub mod breeding;
pub mod components;
pub mod config;
pub mod engine;
pub mod ensemble;
pub mod error;
pub mod history;
pub mod matrix;
pub mod systems;
pub mod tensor;
pub mod world;

pub use components::*;
pub use engine::{InitialPopulation, Simulation};
pub use error::{ConfigError, SimulationError};
pub use history::{History, HistoryRecord};
pub use matrix::MatrixSimulation;
pub use world::AgentSimulation;
