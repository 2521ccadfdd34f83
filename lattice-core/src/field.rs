//! Parallel noise evaluation over point batches and tiling grids.
//!
//! Grids are written row-major (`x` fastest, then `y`, then `z`) and are
//! meant to be copied into whatever buffer the host uploads or stores.

use lattice_utils::NoiseError;
use lattice_utils::math::{Scalar, Vector};
use lattice_utils::noise::PerlinNoise;
use rayon::prelude::*;

/// Evaluate 2D noise at each point in parallel.
#[must_use]
pub fn sample_noise_batch_2d<T: Scalar>(noise: &PerlinNoise<T>, points: &[Vector<T, 2>]) -> Vec<T> {
    points
        .par_iter()
        .map(|&[x, y]| noise.noise_2d(x, y))
        .collect()
}

/// Evaluate 3D noise at each point in parallel.
#[must_use]
pub fn sample_noise_batch_3d<T: Scalar>(noise: &PerlinNoise<T>, points: &[Vector<T, 3>]) -> Vec<T> {
    points
        .par_iter()
        .map(|&[x, y, z]| noise.noise_3d(x, y, z))
        .collect()
}

/// A grid of tileable turbulence samples.
///
/// Sample `(i, j, k)` sits at `(i, j, k) · cell_size` in noise space and the
/// tiling periods are `(width, height, depth) · cell_size`, so the grid wraps
/// seamlessly onto itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileableGrid {
    width: usize,
    height: usize,
    depth: usize,
    cell_size: f64,
    frequency: f64,
}

impl TileableGrid {
    /// Noise-space distance between adjacent samples unless overridden.
    pub const DEFAULT_CELL_SIZE: f64 = 1.0 / 32.0;
    /// Starting turbulence frequency unless overridden.
    pub const DEFAULT_FREQUENCY: f64 = 4.0;

    /// Create a grid. `depth` only matters for [`Self::sample_3d`].
    ///
    /// The full `width × height × depth` sample count must fit in `usize`.
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self, NoiseError> {
        for (axis, extent) in [('x', width), ('y', height), ('z', depth)] {
            if extent == 0 {
                return Err(NoiseError::InvalidPeriod { axis, value: 0.0 });
            }
        }
        if width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(depth))
            .is_none()
        {
            return Err(NoiseError::GridTooLarge {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
            cell_size: Self::DEFAULT_CELL_SIZE,
            frequency: Self::DEFAULT_FREQUENCY,
        })
    }

    /// Use a different sample spacing.
    pub fn with_cell_size(self, cell_size: f64) -> Result<Self, NoiseError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(NoiseError::InvalidCellSize(cell_size));
        }
        Ok(Self { cell_size, ..self })
    }

    /// Use a different starting turbulence frequency.
    pub fn with_frequency(self, frequency: f64) -> Result<Self, NoiseError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(NoiseError::InvalidFrequency(frequency));
        }
        Ok(Self { frequency, ..self })
    }

    /// Grid extent in samples as `[width, height, depth]`.
    #[must_use]
    pub const fn extent(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    /// Tiling periods in noise space as `[w, h, d]`.
    #[must_use]
    pub fn periods(&self) -> [f64; 3] {
        self.extent().map(|e| e as f64 * self.cell_size)
    }

    /// Noise-space coordinate of a sample index.
    #[inline]
    fn coord<T: Scalar>(&self, index: usize) -> T {
        T::from_f64(index as f64 * self.cell_size)
    }

    /// Fill a `width × height` buffer with 2D tileable turbulence.
    #[must_use]
    pub fn sample_2d<T: Scalar>(&self, noise: &PerlinNoise<T>) -> Vec<T> {
        let [w, h, _] = self.periods().map(T::from_f64);
        let freq = T::from_f64(self.frequency);

        let mut out = vec![T::zero(); self.width * self.height];
        out.par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, chunk)| {
                let y = self.coord(row);
                for (column, value) in chunk.iter_mut().enumerate() {
                    *value = noise.tileable_turbulence_2d(self.coord(column), y, w, h, freq);
                }
            });
        out
    }

    /// Fill a `width × height × depth` buffer with 3D tileable turbulence.
    #[must_use]
    pub fn sample_3d<T: Scalar>(&self, noise: &PerlinNoise<T>) -> Vec<T> {
        let [w, h, d] = self.periods().map(T::from_f64);
        let freq = T::from_f64(self.frequency);

        let mut out = vec![T::zero(); self.width * self.height * self.depth];
        out.par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, chunk)| {
                let y = self.coord(row % self.height);
                let z = self.coord(row / self.height);
                for (column, value) in chunk.iter_mut().enumerate() {
                    *value =
                        noise.tileable_turbulence_3d(self.coord(column), y, z, w, h, d, freq);
                }
            });
        out
    }
}
