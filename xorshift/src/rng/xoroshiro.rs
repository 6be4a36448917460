//! xoroshiro128+ random number generator
//!
//! 64-bit output, 128-bit state. The low bits of the output are weaker
//! than the high bits; prefer the high bits when converting to floats.

use serde::{Deserialize, Serialize};

use crate::core::bits::rotl;
use crate::core::traits::{BitGenerator, SeedableGenerator};
use crate::rng::expand_seed;

/// xoroshiro128+ generator
///
/// # Example
/// ```
/// use xorshift::prelude::*;
///
/// let mut rng = Xoroshiro128Plus::from_state([1, 2]);
/// assert_eq!(rng.next(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128Plus {
    s: [u64; 2],
}

impl BitGenerator for Xoroshiro128Plus {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        let s0 = self.s[0];
        let mut s1 = self.s[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s[0] = rotl(s0, 24) ^ s1 ^ (s1 << 16);
        self.s[1] = rotl(s1, 37);

        result
    }
}

impl SeedableGenerator for Xoroshiro128Plus {
    type State = [u64; 2];
    const STATE_WORDS: usize = 2;

    fn new(seed: u64) -> Self {
        Self {
            s: expand_seed(seed),
        }
    }

    fn from_state(state: [u64; 2]) -> Self {
        Self { s: state }
    }

    fn state(&self) -> [u64; 2] {
        self.s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_state_sequence() {
        let mut rng = Xoroshiro128Plus::from_state([1, 2]);
        assert_eq!(rng.next(), 0x0000_0000_0000_0003);
        assert_eq!(rng.next(), 0x0000_0060_0103_0003);
        assert_eq!(rng.next(), 0x20C1_02C3_0200_0C03);
    }

    #[test]
    fn test_seeded_state_comes_from_splitmix() {
        let rng = Xoroshiro128Plus::new(42);
        assert_eq!(rng.state(), [0xBDD7_3226_2FEB_6E95, 0x28EF_E333_B266_F103]);
    }

    #[test]
    fn test_output_is_sum_before_update() {
        let mut rng = Xoroshiro128Plus::new(7);
        let [s0, s1] = rng.state();
        assert_eq!(rng.next(), s0.wrapping_add(s1));
    }
}
