//! Noise configuration.
//!
//! Hosts usually keep this next to their other settings as JSON5. A missing
//! `seed` picks a fresh one from entropy on every build.

use lattice_utils::NoiseError;
use lattice_utils::math::Scalar;
use lattice_utils::noise::{LatticeSize, PerlinNoise};
use lattice_utils::random::xoroshiro::Xoroshiro;
use serde::{Deserialize, Serialize};

/// Parameters for building a [`PerlinNoise`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Seed for the table random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Number of distinct permutation entries.
    pub table_size: usize,
    /// Spatial period in lattice cells (power of two, at most `table_size`).
    pub lattice_period: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            table_size: LatticeSize::DEFAULT.table_size(),
            lattice_period: LatticeSize::DEFAULT.period(),
        }
    }
}

impl NoiseConfig {
    /// Default sizing with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse a config from JSON5 text. Missing fields take their defaults.
    pub fn from_json5(text: &str) -> Result<Self, NoiseError> {
        serde_json5::from_str(text).map_err(|e| NoiseError::Config(e.to_string()))
    }

    /// Validated lattice sizing.
    pub const fn lattice_size(&self) -> Result<LatticeSize, NoiseError> {
        LatticeSize::new(self.table_size, self.lattice_period)
    }

    /// Build a generator.
    pub fn build<T: Scalar>(&self) -> Result<PerlinNoise<T>, NoiseError> {
        let size = self.lattice_size()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "Building noise tables with seed {seed} (table size {}, period {})",
            size.table_size(),
            size.period()
        );
        Ok(PerlinNoise::with_size(&mut Xoroshiro::from_seed(seed), size))
    }
}
