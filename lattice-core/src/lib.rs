//! Consumers of the gradient noise generators.
//!
//! This crate turns [`lattice_utils::noise::PerlinNoise`] into things a host
//! application can use directly: a serde-backed [`NoiseConfig`], parallel
//! batch and grid sampling in [`field`], and opt-in process-wide instances in
//! [`shared`].

pub mod config;
pub mod field;
pub mod shared;

pub use config::NoiseConfig;
pub use field::{TileableGrid, sample_noise_batch_2d, sample_noise_batch_3d};
pub use lattice_utils::NoiseError;
pub use lattice_utils::noise::{LatticeSize, PerlinNoise};
