//! The generator family
//!
//! Generators adapted from <https://prng.di.unimi.it/> plus SFC64.
//! CRITICAL: Output streams must stay bit-identical to the reference
//! algorithms. Any change to a constant, shift or seeding order changes
//! every downstream sequence.

mod sfc;
mod splitmix;
mod xoroshiro;
mod xorshift;
mod xoshiro;

pub use sfc::Sfc64;
pub use splitmix::SplitMix64;
pub use xoroshiro::Xoroshiro128Plus;
pub use xorshift::Xorshift64Star;
pub use xoshiro::{Xoshiro128Plus, Xoshiro128StarStar, Xoshiro256Plus, Xoshiro256StarStar};

pub(crate) use splitmix::expand_seed;
