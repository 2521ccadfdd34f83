//! Gradient noise generation.
//!
//! - [`PerlinNoise`] - 1D/2D/3D gradient noise, turbulence and tileable variants
//! - [`LatticeTables`] - Permutation and gradient tables a generator is built from
//! - [`LatticeSize`] - Table size and spatial period of a generator

mod lattice;
mod perlin_noise;
mod turbulence;

pub use lattice::{LatticeSize, LatticeTables};
pub use perlin_noise::PerlinNoise;
