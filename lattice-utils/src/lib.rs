//! Numeric and noise primitives.
//!
//! The generators in [`noise`] are pure functions of their seed and input
//! coordinates: tables are built once from a [`random::Random`] source and
//! never mutated afterwards.

pub mod error;
pub mod math;
pub mod noise;
pub mod random;

pub use error::NoiseError;
