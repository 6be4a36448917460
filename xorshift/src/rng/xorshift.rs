//! xorshift64* random number generator
//!
//! The smallest generator in the crate: one 64-bit word of state, 64-bit
//! output.
//!
//! # Algorithm
//!
//! A Marsaglia xorshift over the state word (shifts 12, 25, 27), then the
//! new state multiplied by `0x2545F4914F6CDD1D`. The multiply scrambles
//! the linear artifacts of plain xorshift in the high bits.
//!
//! # Seeding
//!
//! The seed becomes the state as-is; there is no SplitMix64 expansion.
//! A zero seed is a fixed point: every output is 0. Callers must pick a
//! nonzero seed.

use serde::{Deserialize, Serialize};

use crate::core::traits::{BitGenerator, SeedableGenerator};

const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// xorshift64* generator
///
/// # Example
/// ```
/// use xorshift::prelude::*;
///
/// let mut rng1 = Xorshift64Star::new(12345);
/// let mut rng2 = Xorshift64Star::new(12345);
/// assert_eq!(rng1.next(), rng2.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64Star {
    /// Internal state (64-bit)
    state: u64,
}

impl BitGenerator for Xorshift64Star {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MULTIPLIER)
    }
}

impl SeedableGenerator for Xorshift64Star {
    type State = [u64; 1];
    const STATE_WORDS: usize = 1;

    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn from_state(state: [u64; 1]) -> Self {
        Self { state: state[0] }
    }

    fn state(&self) -> [u64; 1] {
        [self.state]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_not_expanded() {
        let rng = Xorshift64Star::new(12345);
        assert_eq!(rng.state(), [12345]);
    }

    #[test]
    fn test_output_is_scrambled_new_state() {
        let mut rng = Xorshift64Star::new(12345);
        let value = rng.next();
        assert_eq!(value, rng.state()[0].wrapping_mul(MULTIPLIER));
    }

    #[test]
    fn test_zero_seed_is_fixed_point() {
        let mut rng = Xorshift64Star::new(0);
        for _ in 0..10 {
            assert_eq!(rng.next(), 0);
        }
        assert_eq!(rng.state(), [0]);
    }

    #[test]
    fn test_known_sequence() {
        let mut rng = Xorshift64Star::new(12345);
        assert_eq!(rng.next(), 0x9857_FB32_C9EF_B5E4);
        assert_eq!(rng.next(), 0xC0CE_BA4B_4A71_BCE4);
        assert_eq!(rng.next(), 0x1399_CE5B_8ADB_52C4);
    }
}
