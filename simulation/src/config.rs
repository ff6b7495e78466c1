//! Benchmark configuration
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults below. Command-line flags are applied on top by the binary.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Initial population sizes (per type) compared by default
pub const DEFAULT_SIZES: [i64; 3] = [100, 1_000, 10_000];

pub const DEFAULT_YEARS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// Initial count of each type, one benchmark per entry
    pub sizes: Vec<i64>,
    pub years: u32,
    /// Seed for the agent engine; entropy when absent
    pub seed: Option<u64>,
    /// Agent replicates averaged next to the matrix projection, 0 to skip
    pub replicates: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            years: DEFAULT_YEARS,
            seed: None,
            replicates: 0,
        }
    }
}

impl BenchmarkConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("at least one size is required".into()));
        }
        if let Some(size) = self.sizes.iter().find(|size| **size < 0) {
            return Err(ConfigError::Invalid(format!(
                "population size {size} is negative"
            )));
        }
        Ok(())
    }
}
