//! Seedable pseudo-random sources used to build noise tables.
//!
//! Noise construction only ever draws from a [`Random`], so the same seed
//! always yields the same permutation and gradient tables.

pub mod legacy_random;
pub mod xoroshiro;

/// A deterministic pseudo-random number source.
pub trait Random {
    /// Next 32 uniformly distributed bits.
    fn next_i32(&mut self) -> i32;

    /// Next value uniformly distributed in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next value uniformly distributed in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}
