//! Error type shared by the noise crates.

use thiserror::Error;

/// Errors raised while validating noise parameters.
///
/// The raw sampling functions never return these; they are produced by
/// constructors and by consumers that check caller input up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    /// Table size or lattice period outside the supported range.
    #[error(
        "invalid lattice size: table_size={table_size}, period={period} \
         (period must be a power of two in [2, table_size], table_size in [2, {max}])",
        max = crate::noise::LatticeSize::MAX_TABLE_SIZE
    )]
    InvalidLatticeSize {
        /// Requested permutation table size.
        table_size: usize,
        /// Requested lattice period.
        period: usize,
    },
    /// A tiling period that is not a positive finite number.
    #[error("invalid period on axis {axis}: {value}")]
    InvalidPeriod {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The rejected value.
        value: f64,
    },
    /// A grid whose sample count does not fit in `usize`.
    #[error("grid too large: {width} x {height} x {depth} samples")]
    GridTooLarge {
        /// Samples along x.
        width: usize,
        /// Samples along y.
        height: usize,
        /// Samples along z.
        depth: usize,
    },
    /// A sample spacing that is not a positive finite number.
    #[error("invalid cell size: {0}")]
    InvalidCellSize(f64),
    /// A starting frequency that is not a positive finite number.
    #[error("invalid frequency: {0}")]
    InvalidFrequency(f64),
    /// Configuration text could not be parsed.
    #[error("invalid noise config: {0}")]
    Config(String),
}
