//! The bit generator contract
//!
//! [`BitGenerator`] is what sampling code consumes: advance-and-emit plus
//! static output bounds. [`SeedableGenerator`] adds the construction paths
//! (seed or explicit state vector) and re-seeding.

use crate::core::bits::Word;
use crate::error::GeneratorError;

/// A stateful source of uniformly distributed words
///
/// Each call to [`next`](BitGenerator::next) mutates the generator in place.
/// An instance is single-owner; there is no internal locking.
pub trait BitGenerator {
    /// Output word type (u32 or u64)
    type Output: Word;

    /// Advance the state and return the next output
    fn next(&mut self) -> Self::Output;

    /// Smallest value [`next`](BitGenerator::next) can return
    #[inline]
    fn min() -> Self::Output
    where
        Self: Sized,
    {
        <Self::Output as Word>::MIN
    }

    /// Largest value [`next`](BitGenerator::next) can return
    #[inline]
    fn max() -> Self::Output
    where
        Self: Sized,
    {
        <Self::Output as Word>::MAX
    }

    /// Advance `n` times, discarding the outputs
    ///
    /// Equivalent to calling [`next`](BitGenerator::next) `n` times; there
    /// is no closed-form jump.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Borrow the generator as an endless iterator over its outputs
    ///
    /// # Example
    /// ```
    /// use xorshift::prelude::*;
    ///
    /// let mut rng = Xoshiro128Plus::new(7);
    /// let first: Vec<u32> = rng.iter().take(4).collect();
    /// assert_eq!(first.len(), 4);
    /// ```
    fn iter(&mut self) -> Outputs<'_, Self>
    where
        Self: Sized,
    {
        Outputs { generator: self }
    }
}

/// A generator that can be built from a 64-bit seed or a raw state vector
pub trait SeedableGenerator: BitGenerator + Sized {
    /// Full internal state, a fixed-size array of words
    type State: Copy + AsRef<[Self::Output]> + for<'a> TryFrom<&'a [Self::Output]>;

    /// Number of words in [`State`](SeedableGenerator::State)
    const STATE_WORDS: usize;

    /// Deterministically initialize from a 64-bit seed
    fn new(seed: u64) -> Self;

    /// Use `state` verbatim; no validation is performed
    fn from_state(state: Self::State) -> Self;

    /// Copy of the current state vector
    ///
    /// `from_state(g.state())` resumes the exact stream of `g`.
    fn state(&self) -> Self::State;

    /// Re-run seeded initialization in place
    fn reseed(&mut self, seed: u64) {
        log::trace!("reseeding {} from {:#x}", std::any::type_name::<Self>(), seed);
        *self = Self::new(seed);
    }

    /// Build from a runtime-length slice of state words
    ///
    /// # Errors
    /// [`GeneratorError::StateLength`] if `words.len()` is not
    /// [`STATE_WORDS`](SeedableGenerator::STATE_WORDS).
    ///
    /// # Example
    /// ```
    /// use xorshift::prelude::*;
    ///
    /// let rng = Xoroshiro128Plus::from_state_slice(&[1, 2]).unwrap();
    /// assert_eq!(rng.state(), [1, 2]);
    /// assert!(Xoroshiro128Plus::from_state_slice(&[1, 2, 3]).is_err());
    /// ```
    fn from_state_slice(words: &[Self::Output]) -> Result<Self, GeneratorError> {
        match <Self::State as TryFrom<&[Self::Output]>>::try_from(words) {
            Ok(state) => Ok(Self::from_state(state)),
            Err(_) => {
                log::warn!(
                    "rejected {}-word state for {}",
                    words.len(),
                    std::any::type_name::<Self>()
                );
                Err(GeneratorError::StateLength {
                    expected: Self::STATE_WORDS,
                    actual: words.len(),
                })
            }
        }
    }
}

/// Endless iterator over a borrowed generator's outputs
///
/// Created by [`BitGenerator::iter`].
#[derive(Debug)]
pub struct Outputs<'a, G> {
    generator: &'a mut G,
}

impl<G: BitGenerator> Iterator for Outputs<'_, G> {
    type Item = G::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
