//! Error types

use std::path::PathBuf;

use crate::components::MAX_AGE;

/// Errors raised while setting up a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A population argument was negative.
    #[error("invalid argument `{name}`: {value} (must be non-negative)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// Tensor mass must be finite and non-negative.
    #[error("invalid cohort mass {mass} at age {age}")]
    InvalidMass { age: usize, mass: f64 },

    #[error("age {age} is past the last band ({max})", max = MAX_AGE)]
    AgeOutOfRange { age: usize },
}

/// Errors loading a benchmark config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Invalid(String),
}
