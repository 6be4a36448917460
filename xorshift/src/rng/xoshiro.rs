//! xoshiro256 / xoshiro128 generators
//!
//! All four variants share one linear engine over a 4-word state. They
//! differ only in word width (u64 or u32), the engine's shift and rotation
//! constants, and the scrambler applied to produce the output:
//!
//! | Generator | Word | Shift | Rotate | Output |
//! |---|---|---|---|---|
//! | [`Xoshiro256Plus`] | u64 | 17 | 45 | `s0 + s3` |
//! | [`Xoshiro128Plus`] | u32 | 9 | 11 | `s0 + s3` |
//! | [`Xoshiro256StarStar`] | u64 | 17 | 45 | `rotl(s1 * 5, 7) * 9` |
//! | [`Xoshiro128StarStar`] | u32 | 9 | 11 | `rotl(s1 * 5, 7) * 9` |
//!
//! The `+` outputs have weak low bits; the `**` variants are the
//! general-purpose choice.

use serde::{Deserialize, Serialize};

use crate::core::bits::Word;
use crate::core::traits::{BitGenerator, SeedableGenerator};
use crate::rng::expand_seed;

const SHIFT_256: u32 = 17;
const ROTATE_256: u32 = 45;
const SHIFT_128: u32 = 9;
const ROTATE_128: u32 = 11;

/// Advance a xoshiro state by one step
#[inline(always)]
fn step<W: Word>(s: &mut [W; 4], shift: u32, rotate: u32) {
    let [mut s0, mut s1, mut s2, mut s3] = *s;
    let t = s1 << shift;

    s2 ^= s0;
    s3 ^= s1;
    s1 ^= s2;
    s0 ^= s3;

    s2 ^= t;
    s3 = s3.rotl(rotate);

    *s = [s0, s1, s2, s3];
}

/// `+` scrambler, evaluated before the step
#[inline(always)]
fn plus<W: Word>(s: &[W; 4]) -> W {
    s[0].wrapping_add(s[3])
}

/// `**` scrambler, evaluated before the step
#[inline(always)]
fn star_star<W: Word>(s: &[W; 4]) -> W {
    s[1]
        .wrapping_mul(W::truncate_from(5))
        .rotl(7)
        .wrapping_mul(W::truncate_from(9))
}

macro_rules! xoshiro_seedable {
    ($name:ident, $word:ty) => {
        impl SeedableGenerator for $name {
            type State = [$word; 4];
            const STATE_WORDS: usize = 4;

            fn new(seed: u64) -> Self {
                Self {
                    s: expand_seed(seed),
                }
            }

            fn from_state(state: [$word; 4]) -> Self {
                Self { s: state }
            }

            fn state(&self) -> [$word; 4] {
                self.s
            }
        }
    };
}

/// xoshiro256+ generator: 64-bit output, 256-bit state
///
/// Fastest of the family for floating-point generation, where only the
/// upper 53 bits are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

impl BitGenerator for Xoshiro256Plus {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = plus(&self.s);
        step(&mut self.s, SHIFT_256, ROTATE_256);
        result
    }
}

xoshiro_seedable!(Xoshiro256Plus, u64);

/// xoshiro128+ generator: 32-bit output, 128-bit state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro128Plus {
    s: [u32; 4],
}

impl BitGenerator for Xoshiro128Plus {
    type Output = u32;

    #[inline]
    fn next(&mut self) -> u32 {
        let result = plus(&self.s);
        step(&mut self.s, SHIFT_128, ROTATE_128);
        result
    }
}

xoshiro_seedable!(Xoshiro128Plus, u32);

/// xoshiro256** generator: 64-bit output, 256-bit state
///
/// The highest quality 64-bit generator in the crate.
///
/// # Example
/// ```
/// use xorshift::prelude::*;
///
/// let mut rng = Xoshiro256StarStar::from_state([1, 2, 3, 4]);
/// assert_eq!(rng.next(), 11520);
/// assert_eq!(rng.next(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl BitGenerator for Xoshiro256StarStar {
    type Output = u64;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = star_star(&self.s);
        step(&mut self.s, SHIFT_256, ROTATE_256);
        result
    }
}

xoshiro_seedable!(Xoshiro256StarStar, u64);

/// xoshiro128** generator: 32-bit output, 128-bit state
///
/// The highest quality 32-bit generator in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro128StarStar {
    s: [u32; 4],
}

impl BitGenerator for Xoshiro128StarStar {
    type Output = u32;

    #[inline]
    fn next(&mut self) -> u32 {
        let result = star_star(&self.s);
        step(&mut self.s, SHIFT_128, ROTATE_128);
        result
    }
}

xoshiro_seedable!(Xoshiro128StarStar, u32);
