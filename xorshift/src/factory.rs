//! Runtime generator selection
//!
//! Benchmarks and other drivers pick a generator by name or from a config
//! record instead of by type. [`create_generator`] turns a
//! [`GeneratorConfig`] into an [`AnyGenerator`], which dispatches to the
//! concrete variant and widens every output to u64.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::bits::Word;
use crate::core::traits::{BitGenerator, SeedableGenerator};
use crate::error::GeneratorError;
use crate::rng::{
    Sfc64, SplitMix64, Xoroshiro128Plus, Xorshift64Star, Xoshiro128Plus, Xoshiro128StarStar,
    Xoshiro256Plus, Xoshiro256StarStar,
};

/// Identifies one generator variant
///
/// Names match the labels used when comparing generators side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    #[serde(rename = "splitmix64")]
    SplitMix64,
    #[serde(rename = "xoroshiro128p")]
    Xoroshiro128Plus,
    #[serde(rename = "xoshiro256p")]
    Xoshiro256Plus,
    #[serde(rename = "xoshiro128p")]
    Xoshiro128Plus,
    #[serde(rename = "xoshiro256ss")]
    Xoshiro256StarStar,
    #[serde(rename = "xoshiro128ss")]
    Xoshiro128StarStar,
    #[serde(rename = "sfc64")]
    Sfc64,
    #[serde(rename = "xorshift64s")]
    Xorshift64Star,
}

impl GeneratorKind {
    /// Every kind, in declaration order
    pub const ALL: [GeneratorKind; 8] = [
        GeneratorKind::SplitMix64,
        GeneratorKind::Xoroshiro128Plus,
        GeneratorKind::Xoshiro256Plus,
        GeneratorKind::Xoshiro128Plus,
        GeneratorKind::Xoshiro256StarStar,
        GeneratorKind::Xoshiro128StarStar,
        GeneratorKind::Sfc64,
        GeneratorKind::Xorshift64Star,
    ];

    /// Short name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::SplitMix64 => "splitmix64",
            GeneratorKind::Xoroshiro128Plus => "xoroshiro128p",
            GeneratorKind::Xoshiro256Plus => "xoshiro256p",
            GeneratorKind::Xoshiro128Plus => "xoshiro128p",
            GeneratorKind::Xoshiro256StarStar => "xoshiro256ss",
            GeneratorKind::Xoshiro128StarStar => "xoshiro128ss",
            GeneratorKind::Sfc64 => "sfc64",
            GeneratorKind::Xorshift64Star => "xorshift64s",
        }
    }

    /// Width of one output in bits
    pub fn output_bits(self) -> u32 {
        match self {
            GeneratorKind::Xoshiro128Plus | GeneratorKind::Xoshiro128StarStar => u32::BITS,
            _ => u64::BITS,
        }
    }

    /// Number of words in the state vector
    pub fn state_words(self) -> usize {
        match self {
            GeneratorKind::SplitMix64 => SplitMix64::STATE_WORDS,
            GeneratorKind::Xoroshiro128Plus => Xoroshiro128Plus::STATE_WORDS,
            GeneratorKind::Xoshiro256Plus => Xoshiro256Plus::STATE_WORDS,
            GeneratorKind::Xoshiro128Plus => Xoshiro128Plus::STATE_WORDS,
            GeneratorKind::Xoshiro256StarStar => Xoshiro256StarStar::STATE_WORDS,
            GeneratorKind::Xoshiro128StarStar => Xoshiro128StarStar::STATE_WORDS,
            GeneratorKind::Sfc64 => Sfc64::STATE_WORDS,
            GeneratorKind::Xorshift64Star => Xorshift64Star::STATE_WORDS,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::UnknownKind(s.to_string()))
    }
}

/// Which generator to build, and from what seed
///
/// # Example
/// ```
/// use xorshift::{GeneratorConfig, GeneratorKind};
///
/// let config = GeneratorConfig::from_json(r#"{"kind": "sfc64", "seed": 42}"#).unwrap();
/// assert_eq!(config.kind, GeneratorKind::Sfc64);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    pub seed: u64,
}

impl GeneratorConfig {
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        Self { kind, seed }
    }

    /// Parse a config from JSON
    ///
    /// # Errors
    /// [`GeneratorError::InvalidConfig`] if the JSON is malformed or names
    /// an unknown kind.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, GeneratorError> {
        serde_json::to_string(self).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    /// Build the configured generator
    pub fn build(&self) -> AnyGenerator {
        create_generator(self)
    }
}

/// Any generator in the crate, selected at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGenerator {
    SplitMix64(SplitMix64),
    Xoroshiro128Plus(Xoroshiro128Plus),
    Xoshiro256Plus(Xoshiro256Plus),
    Xoshiro128Plus(Xoshiro128Plus),
    Xoshiro256StarStar(Xoshiro256StarStar),
    Xoshiro128StarStar(Xoshiro128StarStar),
    Sfc64(Sfc64),
    Xorshift64Star(Xorshift64Star),
}

/// Run `$body` with `$g` bound to the wrapped generator
macro_rules! dispatch {
    ($any:expr, $g:ident => $body:expr) => {
        match $any {
            AnyGenerator::SplitMix64($g) => $body,
            AnyGenerator::Xoroshiro128Plus($g) => $body,
            AnyGenerator::Xoshiro256Plus($g) => $body,
            AnyGenerator::Xoshiro128Plus($g) => $body,
            AnyGenerator::Xoshiro256StarStar($g) => $body,
            AnyGenerator::Xoshiro128StarStar($g) => $body,
            AnyGenerator::Sfc64($g) => $body,
            AnyGenerator::Xorshift64Star($g) => $body,
        }
    };
}

/// Bounds of a concrete generator type, widened to u64
fn widened_bounds<G: BitGenerator>(_: &G) -> (u64, u64) {
    (G::min().widen(), G::max().widen())
}

impl AnyGenerator {
    /// Seed a generator of the given kind
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        match kind {
            GeneratorKind::SplitMix64 => AnyGenerator::SplitMix64(SplitMix64::new(seed)),
            GeneratorKind::Xoroshiro128Plus => {
                AnyGenerator::Xoroshiro128Plus(Xoroshiro128Plus::new(seed))
            }
            GeneratorKind::Xoshiro256Plus => AnyGenerator::Xoshiro256Plus(Xoshiro256Plus::new(seed)),
            GeneratorKind::Xoshiro128Plus => AnyGenerator::Xoshiro128Plus(Xoshiro128Plus::new(seed)),
            GeneratorKind::Xoshiro256StarStar => {
                AnyGenerator::Xoshiro256StarStar(Xoshiro256StarStar::new(seed))
            }
            GeneratorKind::Xoshiro128StarStar => {
                AnyGenerator::Xoshiro128StarStar(Xoshiro128StarStar::new(seed))
            }
            GeneratorKind::Sfc64 => AnyGenerator::Sfc64(Sfc64::new(seed)),
            GeneratorKind::Xorshift64Star => AnyGenerator::Xorshift64Star(Xorshift64Star::new(seed)),
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            AnyGenerator::SplitMix64(_) => GeneratorKind::SplitMix64,
            AnyGenerator::Xoroshiro128Plus(_) => GeneratorKind::Xoroshiro128Plus,
            AnyGenerator::Xoshiro256Plus(_) => GeneratorKind::Xoshiro256Plus,
            AnyGenerator::Xoshiro128Plus(_) => GeneratorKind::Xoshiro128Plus,
            AnyGenerator::Xoshiro256StarStar(_) => GeneratorKind::Xoshiro256StarStar,
            AnyGenerator::Xoshiro128StarStar(_) => GeneratorKind::Xoshiro128StarStar,
            AnyGenerator::Sfc64(_) => GeneratorKind::Sfc64,
            AnyGenerator::Xorshift64Star(_) => GeneratorKind::Xorshift64Star,
        }
    }

    /// Next output, zero-extended to 64 bits for 32-bit generators
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        dispatch!(self, g => g.next().widen())
    }

    /// Advance `n` times, discarding the outputs
    pub fn discard(&mut self, n: u64) {
        dispatch!(self, g => g.discard(n))
    }

    /// Re-seed in place, keeping the kind
    pub fn reseed(&mut self, seed: u64) {
        dispatch!(self, g => g.reseed(seed))
    }

    /// Smallest value [`next_u64`](AnyGenerator::next_u64) can return
    pub fn output_min(&self) -> u64 {
        dispatch!(self, g => widened_bounds(g).0)
    }

    /// Largest value [`next_u64`](AnyGenerator::next_u64) can return
    pub fn output_max(&self) -> u64 {
        dispatch!(self, g => widened_bounds(g).1)
    }

    /// Current state vector, each word zero-extended to 64 bits
    pub fn state_words(&self) -> Vec<u64> {
        dispatch!(self, g => g.state().into_iter().map(Word::widen).collect())
    }
}

/// Create a generator from config
///
/// # Example
/// ```
/// use xorshift::{create_generator, GeneratorConfig, GeneratorKind};
///
/// let config = GeneratorConfig::new(GeneratorKind::Xoshiro128StarStar, 7);
/// let mut rng = create_generator(&config);
/// assert!(rng.next_u64() <= u32::MAX as u64);
/// ```
pub fn create_generator(config: &GeneratorConfig) -> AnyGenerator {
    log::debug!("building {} generator from seed {:#x}", config.kind, config.seed);

    if config.kind == GeneratorKind::Xorshift64Star && config.seed == 0 {
        log::warn!("xorshift64s seeded with 0 will only ever output 0");
    }

    AnyGenerator::new(config.kind, config.seed)
}
