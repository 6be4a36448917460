//! SFC64 (Small Fast Chaotic) random number generator
//!
//! A nonlinear generator with a 64-bit counter in the last state word, so
//! no seed can land it in a short cycle. Seeding skips the first
//! twelve outputs to move away from the low-entropy start.

use serde::{Deserialize, Serialize};

use crate::core::bits::rotl;
use crate::core::traits::{BitGenerator, SeedableGenerator};

/// Outputs discarded after seeding
const WARMUP_ROUNDS: u64 = 12;

/// SFC64 generator
///
/// # Example
/// ```
/// use xorshift::prelude::*;
///
/// let mut seeded = Sfc64::new(5);
///
/// let mut manual = Sfc64::from_state([5, 5, 5, 1]);
/// manual.discard(12);
///
/// assert_eq!(seeded.next(), manual.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sfc64 {
    s: [u64; 4],
}

impl Sfc64 {
    fn warmup(&mut self) {
        self.discard(WARMUP_ROUNDS);
    }
}

impl BitGenerator for Sfc64 {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        let [a, b, c, counter] = self.s;
        let result = a.wrapping_add(b).wrapping_add(counter);

        self.s = [
            b ^ (b >> 11),
            c.wrapping_add(c << 3),
            rotl(c, 24).wrapping_add(result),
            counter.wrapping_add(1),
        ];

        result
    }
}

impl SeedableGenerator for Sfc64 {
    type State = [u64; 4];
    const STATE_WORDS: usize = 4;

    /// Seed `a`, `b` and `c` with `seed`, start the counter at 1, then warm up
    fn new(seed: u64) -> Self {
        let mut rng = Self {
            s: [seed, seed, seed, 1],
        };
        rng.warmup();
        rng
    }

    /// Use `state` verbatim, without warm-up
    fn from_state(state: [u64; 4]) -> Self {
        Self { s: state }
    }

    fn state(&self) -> [u64; 4] {
        self.s
    }
}
