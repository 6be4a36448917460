//! SplitMix64 seed expander
//!
//! Stretches one 64-bit seed into as many well-mixed 64-bit words as a
//! larger generator needs. Every splitmix-seeded generator in this crate
//! goes through [`expand_seed`].

use serde::{Deserialize, Serialize};

use crate::core::bits::Word;
use crate::core::traits::{BitGenerator, SeedableGenerator};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// SplitMix64 generator
///
/// The seed becomes the state with no further mixing.
///
/// # Example
/// ```
/// use xorshift::prelude::*;
///
/// let mut sm = SplitMix64::new(0);
/// assert_eq!(sm.next(), 0xE220_A839_7B1D_CDAF);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl BitGenerator for SplitMix64 {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }
}

impl SeedableGenerator for SplitMix64 {
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

/// Fill an `N`-word state vector from `seed`
///
/// Draws one SplitMix64 output per word in index order `0..N`. 32-bit words
/// keep the low half of each draw.
pub(crate) fn expand_seed<W: Word, const N: usize>(seed: u64) -> [W; N] {
    let mut expander = SplitMix64::new(seed);
    // from_fn fills in ascending index order.
    std::array::from_fn(|_| W::truncate_from(expander.next()))
}
