//! xorshift-rs - xorshift/xoshiro family pseudo-random number generators
//!
//! Fast, deterministic, non-cryptographic bit generators with one shared
//! contract, so sampling code can treat every variant uniformly.
//!
//! # Architecture
//!
//! - **core**: Word rotation primitive and the generator traits
//! - **rng**: SplitMix64 seed expander and the generator family
//! - **factory**: Runtime selection of a generator from config
//! - **rand_compat**: `rand_core` bridge (feature `rand-compat`)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output stream, bit for bit, on every platform
//! 2. All arithmetic wraps modulo 2^W for the generator's word width
//! 3. Core operations never fail and never allocate
//!
//! # Example
//! ```
//! use xorshift::prelude::*;
//!
//! let mut rng = Xoshiro256StarStar::new(42);
//! let a = rng.next();
//! rng.discard(10);
//! assert!(a <= Xoshiro256StarStar::max());
//! ```

// Module declarations
pub mod core;
pub mod error;
pub mod factory;
pub mod rng;

#[cfg(feature = "rand-compat")]
pub mod rand_compat;

// Re-exports for convenience
pub use crate::core::bits::{rotl, Word};
pub use crate::core::traits::{BitGenerator, Outputs, SeedableGenerator};
pub use error::GeneratorError;
pub use factory::{create_generator, AnyGenerator, GeneratorConfig, GeneratorKind};
pub use rng::{
    Sfc64, SplitMix64, Xoroshiro128Plus, Xorshift64Star, Xoshiro128Plus, Xoshiro128StarStar,
    Xoshiro256Plus, Xoshiro256StarStar,
};

/// Everything needed to construct and drive a generator
pub mod prelude {
    pub use crate::core::traits::{BitGenerator, SeedableGenerator};
    pub use crate::rng::{
        Sfc64, SplitMix64, Xoroshiro128Plus, Xorshift64Star, Xoshiro128Plus, Xoshiro128StarStar,
        Xoshiro256Plus, Xoshiro256StarStar,
    };
}
