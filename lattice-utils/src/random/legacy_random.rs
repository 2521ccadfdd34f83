//! 48-bit linear congruential random source.
//!
//! Small state and a well known sequence; kept for hosts that need to
//! reproduce tables built by an LCG-driven pipeline.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MODULUS_MASK: i64 = (1 << 48) - 1;

const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Linear congruential generator with a 48-bit state.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Create a generator from a seed. Only the low 48 bits are used.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ MULTIPLIER) & MODULUS_MASK,
        }
    }

    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        if bound & (bound - 1) == 0 {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let value = bits % bound;
            // Reject the partial bucket at the top of the range.
            if bits.checked_sub(value).and_then(|d| d.checked_add(bound - 1)).is_some() {
                return value;
            }
        }
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26));
        let low = i64::from(self.next(27));
        ((high << 27) + low) as f64 * DOUBLE_UNIT
    }
}
