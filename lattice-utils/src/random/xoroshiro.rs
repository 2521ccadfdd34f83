//! Xoroshiro128++ random source.
//!
//! The 64-bit seed is expanded to 128 bits with two rounds of Stafford's
//! mix13, so nearby seeds still start from unrelated states.

use crate::random::Random;

const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

#[inline]
const fn mix_stafford_13(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Xoroshiro128++ generator.
#[derive(Debug, Clone)]
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

impl Xoroshiro {
    /// Create a generator from a 64-bit seed.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::from_state(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    /// Create a generator from a raw 128-bit state.
    ///
    /// The all-zero state is a fixed point of the algorithm and is replaced.
    #[must_use]
    pub const fn from_state(lo: u64, hi: u64) -> Self {
        if lo == 0 && hi == 0 {
            Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            }
        } else {
            Self { lo, hi }
        }
    }

    /// Create a generator seeded from the operating system's entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.lo;
        let mut hi = self.hi;
        let result = lo.wrapping_add(hi).rotate_left(17).wrapping_add(lo);
        hi ^= lo;
        self.lo = lo.rotate_left(49) ^ hi ^ (hi << 21);
        self.hi = hi.rotate_left(28);
        result
    }

    #[inline]
    fn next_bits(&mut self, bits: u32) -> u64 {
        self.next_u64() >> (64 - bits)
    }
}

impl Random for Xoroshiro {
    fn next_i32(&mut self) -> i32 {
        self.next_u64() as i32
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        // Lemire's nearly-divisionless rejection method.
        let bound = u64::from(bound as u32);
        let mut product = u64::from(self.next_i32() as u32) * bound;
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = ((!bound).wrapping_add(1) & 0xFFFF_FFFF) % bound;
            while low < threshold {
                product = u64::from(self.next_i32() as u32) * bound;
                low = product & 0xFFFF_FFFF;
            }
        }
        (product >> 32) as i32
    }

    fn next_f64(&mut self) -> f64 {
        self.next_bits(53) as f64 * DOUBLE_UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xoroshiro::from_seed(42);
        let mut b = Xoroshiro::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Xoroshiro::from_seed(1);
        let mut b = Xoroshiro::from_seed(2);
        let same = (0..16).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 16);
    }

    #[test]
    fn zero_state_is_replaced() {
        let mut rng = Xoroshiro::from_state(0, 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn bounded_stays_in_range() {
        let mut rng = Xoroshiro::from_seed(7);
        for bound in [1, 2, 3, 255, 256, 4096, i32::MAX] {
            for _ in 0..200 {
                let value = rng.next_i32_bounded(bound);
                assert!((0..bound).contains(&value), "{value} not in [0, {bound})");
            }
        }
    }

    #[test]
    fn unit_doubles_stay_in_range() {
        let mut rng = Xoroshiro::from_seed(99);
        for _ in 0..1000 {
            assert!((0.0..1.0).contains(&rng.next_f64()));
        }
    }
}
