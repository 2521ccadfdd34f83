//! Process-wide generators for hosts that want one without threading it
//! through their own state.
//!
//! Each instance is built on first access, by exactly one thread; every other
//! caller blocks until it is ready. Unless [`init_f32`] / [`init_f64`] ran
//! first, the tables are seeded from entropy and differ between runs.

use std::sync::OnceLock;

use lattice_utils::noise::PerlinNoise;

static PERLIN_F32: OnceLock<PerlinNoise<f32>> = OnceLock::new();
static PERLIN_F64: OnceLock<PerlinNoise<f64>> = OnceLock::new();

/// Install the single-precision shared generator.
///
/// Returns the generator back if one is already installed.
pub fn init_f32(noise: PerlinNoise<f32>) -> Result<(), PerlinNoise<f32>> {
    PERLIN_F32.set(noise)
}

/// Install the double-precision shared generator.
///
/// Returns the generator back if one is already installed.
pub fn init_f64(noise: PerlinNoise<f64>) -> Result<(), PerlinNoise<f64>> {
    PERLIN_F64.set(noise)
}

/// The shared single-precision generator.
pub fn perlin_f32() -> &'static PerlinNoise<f32> {
    PERLIN_F32.get_or_init(|| {
        log::debug!("Building shared f32 noise generator from entropy");
        PerlinNoise::from_entropy()
    })
}

/// The shared double-precision generator.
pub fn perlin_f64() -> &'static PerlinNoise<f64> {
    PERLIN_F64.get_or_init(|| {
        log::debug!("Building shared f64 noise generator from entropy");
        PerlinNoise::from_entropy()
    })
}
