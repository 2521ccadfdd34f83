//! Classic gradient noise over 1, 2 and 3 dimensions.
//!
//! Each evaluation decomposes the coordinates into a lattice cell and the
//! fractional offset inside it, hashes the cell corners through the
//! permutation table, and blends the corner contributions with the
//! smoothstep [`curve`]. Values at integer lattice points are exactly `0`.

use crate::math::{Scalar, curve, dot, floor, lerp};
use crate::noise::lattice::{LatticeSize, LatticeTables};
use crate::random::Random;
use crate::random::xoroshiro::Xoroshiro;

/// One axis of a lattice cell: both corner indices and the offsets to them.
#[derive(Debug, Clone, Copy)]
struct Axis<T> {
    b0: usize,
    b1: usize,
    r0: T,
    r1: T,
}

/// Gradient noise generator.
///
/// Owns its tables and is immutable after construction, so it can be shared
/// between threads freely. Every function repeats with a period of
/// [`LatticeSize::period`] cells along each axis.
#[derive(Debug, Clone)]
pub struct PerlinNoise<T: Scalar> {
    tables: LatticeTables<T>,
    mask: i64,
}

impl<T: Scalar> PerlinNoise<T> {
    /// Build a generator with the reference [`LatticeSize`].
    pub fn new<R: Random>(random: &mut R) -> Self {
        Self::with_size(random, LatticeSize::DEFAULT)
    }

    /// Build a generator with a custom table size and period.
    pub fn with_size<R: Random>(random: &mut R, size: LatticeSize) -> Self {
        Self {
            tables: LatticeTables::build(random, size),
            mask: size.mask(),
        }
    }

    /// Build a generator from a seed using [`Xoroshiro`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut Xoroshiro::from_seed(seed))
    }

    /// Build a generator from operating system entropy.
    ///
    /// Output differs between runs; prefer [`Self::from_seed`] anywhere
    /// results must be reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(&mut Xoroshiro::from_entropy())
    }

    /// The tables backing this generator.
    #[must_use]
    pub const fn tables(&self) -> &LatticeTables<T> {
        &self.tables
    }

    /// Table sizing and period.
    #[must_use]
    pub const fn size(&self) -> LatticeSize {
        self.tables.size()
    }

    #[inline]
    fn setup(&self, c: T) -> Axis<T> {
        let b0 = floor(c) & self.mask;
        let r0 = c - c.floor();
        Axis {
            b0: b0 as usize,
            b1: ((b0 + 1) & self.mask) as usize,
            r0,
            r1: r0 - T::one(),
        }
    }

    /// Sample 1D noise.
    #[must_use]
    pub fn noise_1d(&self, x: T) -> T {
        let p = self.tables.permutation();
        let g = self.tables.gradients_1d();
        let x = self.setup(x);

        let u = x.r0 * g[p[x.b0]][0];
        let v = x.r1 * g[p[x.b1]][0];
        lerp(u, v, curve(x.r0))
    }

    /// Sample 2D noise.
    #[must_use]
    pub fn noise_2d(&self, x: T, y: T) -> T {
        let p = self.tables.permutation();
        let g = self.tables.gradients_2d();
        let x = self.setup(x);
        let y = self.setup(y);

        let i = p[x.b0];
        let j = p[x.b1];
        let b00 = p[i + y.b0];
        let b01 = p[i + y.b1];
        let b10 = p[j + y.b0];
        let b11 = p[j + y.b1];

        let sx = curve(x.r0);
        let sy = curve(y.r0);

        let a = lerp(
            dot(&g[b00], &[x.r0, y.r0]),
            dot(&g[b10], &[x.r1, y.r0]),
            sx,
        );
        let b = lerp(
            dot(&g[b01], &[x.r0, y.r1]),
            dot(&g[b11], &[x.r1, y.r1]),
            sx,
        );
        lerp(a, b, sy)
    }

    /// Sample 3D noise.
    #[must_use]
    pub fn noise_3d(&self, x: T, y: T, z: T) -> T {
        let p = self.tables.permutation();
        let g = self.tables.gradients_3d();
        let x = self.setup(x);
        let y = self.setup(y);
        let z = self.setup(z);

        let i = p[x.b0];
        let j = p[x.b1];
        let b00 = p[i + y.b0];
        let b01 = p[i + y.b1];
        let b10 = p[j + y.b0];
        let b11 = p[j + y.b1];

        let sx = curve(x.r0);
        let sy = curve(y.r0);
        let sz = curve(z.r0);

        // Bilinear blend of the face at offset `rz` along z.
        let face = |bz: usize, rz: T| {
            let a = lerp(
                dot(&g[b00 + bz], &[x.r0, y.r0, rz]),
                dot(&g[b10 + bz], &[x.r1, y.r0, rz]),
                sx,
            );
            let b = lerp(
                dot(&g[b01 + bz], &[x.r0, y.r1, rz]),
                dot(&g[b11 + bz], &[x.r1, y.r1, rz]),
                sx,
            );
            lerp(a, b, sy)
        };

        lerp(face(z.b0, z.r0), face(z.b1, z.r1), sz)
    }
}
