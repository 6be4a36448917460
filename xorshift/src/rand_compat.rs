//! `rand_core` bridge
//!
//! Implements [`RngCore`] and [`SeedableRng`] for every generator so the
//! `rand` distributions (uniform ranges, floats, shuffles) can draw from
//! them directly.
//!
//! `SeedableRng::seed_from_u64` is overridden to follow this crate's own
//! seeding, so `seed_from_u64(s)` and `SeedableGenerator::new(s)` produce
//! the same stream. `from_seed` reads the 8 seed bytes as a little-endian
//! u64 and seeds the same way.
//!
//! # Example
//! ```
//! use rand_core::{RngCore, SeedableRng};
//! use xorshift::prelude::*;
//!
//! let mut a = <Xoshiro256StarStar as SeedableRng>::seed_from_u64(42);
//! let mut b = <Xoshiro256StarStar as SeedableGenerator>::new(42);
//! assert_eq!(a.next_u64(), b.next());
//! ```

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::core::traits::{BitGenerator, SeedableGenerator};
use crate::rng::{
    Sfc64, SplitMix64, Xoroshiro128Plus, Xorshift64Star, Xoshiro128Plus, Xoshiro128StarStar,
    Xoshiro256Plus, Xoshiro256StarStar,
};

/// 64-bit generators: `next_u32` keeps the high half, the stronger bits
/// for the `+` scramblers.
macro_rules! rng_core_64 {
    ($($name:ident),+ $(,)?) => {$(
        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                (BitGenerator::next(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                BitGenerator::next(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    )+};
}

/// 32-bit generators: `next_u64` joins two consecutive outputs, low first.
macro_rules! rng_core_32 {
    ($($name:ident),+ $(,)?) => {$(
        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                BitGenerator::next(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                impls::next_u64_via_u32(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    )+};
}

macro_rules! seedable_rng {
    ($($name:ident),+ $(,)?) => {$(
        impl SeedableRng for $name {
            type Seed = [u8; 8];

            fn from_seed(seed: [u8; 8]) -> Self {
                <Self as SeedableGenerator>::new(u64::from_le_bytes(seed))
            }

            fn seed_from_u64(state: u64) -> Self {
                <Self as SeedableGenerator>::new(state)
            }
        }
    )+};
}

rng_core_64!(
    SplitMix64,
    Xoroshiro128Plus,
    Xoshiro256Plus,
    Xoshiro256StarStar,
    Sfc64,
    Xorshift64Star,
);

rng_core_32!(Xoshiro128Plus, Xoshiro128StarStar);

seedable_rng!(
    SplitMix64,
    Xoroshiro128Plus,
    Xoshiro256Plus,
    Xoshiro128Plus,
    Xoshiro256StarStar,
    Xoshiro128StarStar,
    Sfc64,
    Xorshift64Star,
);
