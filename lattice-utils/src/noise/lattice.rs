//! Permutation and gradient tables backing [`PerlinNoise`](super::PerlinNoise).
//!
//! All four tables are `2B + 2` entries long. The first `B` entries hold the
//! sampled data and the rest repeat it, so chained `table[i + offset]`
//! lookups never need a modulo.

use crate::error::NoiseError;
use crate::math::{Scalar, Vector, length_squared, normalize};
use crate::random::Random;

/// Squared length below which a sampled gradient is drawn again.
const DEGENERATE_LENGTH_SQUARED: f64 = 1e-12;

/// Sizing of the lattice tables.
///
/// `table_size` is the number of distinct permutation entries (`B`).
/// `period` is the number of lattice cells after which every noise function
/// repeats along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeSize {
    table_size: usize,
    period: usize,
}

impl LatticeSize {
    /// Largest supported permutation table.
    pub const MAX_TABLE_SIZE: usize = 1 << 20;

    /// Reference sizing: 4096 table entries, a 256 cell period.
    pub const DEFAULT: Self = Self {
        table_size: 0x1000,
        period: 0x100,
    };

    /// Validate and create a sizing.
    ///
    /// `period` must be a power of two with `2 <= period <= table_size`, and
    /// `table_size` must not exceed [`Self::MAX_TABLE_SIZE`].
    pub const fn new(table_size: usize, period: usize) -> Result<Self, NoiseError> {
        if table_size < 2
            || table_size > Self::MAX_TABLE_SIZE
            || period < 2
            || period > table_size
            || !period.is_power_of_two()
        {
            return Err(NoiseError::InvalidLatticeSize { table_size, period });
        }
        Ok(Self { table_size, period })
    }

    /// Number of distinct permutation entries.
    #[must_use]
    pub const fn table_size(&self) -> usize {
        self.table_size
    }

    /// Spatial period in lattice cells.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Mask applied to lattice coordinates.
    #[must_use]
    pub const fn mask(&self) -> i64 {
        (self.period - 1) as i64
    }

    /// Length of each extended table.
    #[must_use]
    pub const fn table_len(&self) -> usize {
        self.table_size * 2 + 2
    }
}

impl Default for LatticeSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable permutation and gradient tables.
#[derive(Debug, Clone)]
pub struct LatticeTables<T: Scalar> {
    size: LatticeSize,
    permutation: Box<[usize]>,
    gradients_1d: Box<[Vector<T, 1>]>,
    gradients_2d: Box<[Vector<T, 2>]>,
    gradients_3d: Box<[Vector<T, 3>]>,
}

impl<T: Scalar> LatticeTables<T> {
    /// Build the tables from a random source.
    ///
    /// Draw order is fixed (per index: one 1D, two 2D, three 3D components,
    /// then the shuffle), so a given seed always reproduces the same tables.
    pub fn build<R: Random>(random: &mut R, size: LatticeSize) -> Self {
        let b = size.table_size();
        let len = size.table_len();

        let mut permutation = Vec::with_capacity(len);
        let mut gradients_1d = Vec::with_capacity(len);
        let mut gradients_2d = Vec::with_capacity(len);
        let mut gradients_3d = Vec::with_capacity(len);

        for i in 0..b {
            permutation.push(i);
            gradients_1d.push([T::from_f64(sample_component(random))]);
            gradients_2d.push(sample_unit::<T, _, 2>(random));
            gradients_3d.push(sample_unit::<T, _, 3>(random));
        }

        // Fisher-Yates
        for i in (1..b).rev() {
            let j = random.next_i32_bounded((i + 1) as i32) as usize;
            permutation.swap(i, j);
        }

        extend(&mut permutation, b);
        extend(&mut gradients_1d, b);
        extend(&mut gradients_2d, b);
        extend(&mut gradients_3d, b);

        log::debug!(
            "Built lattice tables: {b} entries, period {}, {} slots",
            size.period(),
            len
        );

        Self {
            size,
            permutation: permutation.into_boxed_slice(),
            gradients_1d: gradients_1d.into_boxed_slice(),
            gradients_2d: gradients_2d.into_boxed_slice(),
            gradients_3d: gradients_3d.into_boxed_slice(),
        }
    }

    /// Sizing these tables were built with.
    #[must_use]
    pub const fn size(&self) -> LatticeSize {
        self.size
    }

    /// Extended permutation table.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Extended 1D gradient table (not normalized).
    #[must_use]
    pub fn gradients_1d(&self) -> &[Vector<T, 1>] {
        &self.gradients_1d
    }

    /// Extended 2D gradient table (unit length).
    #[must_use]
    pub fn gradients_2d(&self) -> &[Vector<T, 2>] {
        &self.gradients_2d
    }

    /// Extended 3D gradient table (unit length).
    #[must_use]
    pub fn gradients_3d(&self) -> &[Vector<T, 3>] {
        &self.gradients_3d
    }
}

/// Uniform sample in `[-1, 1)`.
#[inline]
fn sample_component<R: Random>(random: &mut R) -> f64 {
    random.next_f64() * 2.0 - 1.0
}

/// Sample a direction component-wise and normalize it, redrawing samples
/// too short to normalize.
fn sample_unit<T: Scalar, R: Random, const N: usize>(random: &mut R) -> Vector<T, N> {
    loop {
        let v: Vector<f64, N> = std::array::from_fn(|_| sample_component(random));
        if length_squared(&v) >= DEGENERATE_LENGTH_SQUARED {
            return normalize(&v).map(T::from_f64);
        }
        log::warn!("Redrawing degenerate {N}D gradient sample {v:?}");
    }
}

/// Append the first `b + 2` entries after the first `b`, giving `2b + 2`.
fn extend<V: Copy>(table: &mut Vec<V>, b: usize) {
    table.extend_from_within(0..b);
    table.extend_from_within(0..2);
}
