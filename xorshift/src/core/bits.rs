//! Fixed-width word arithmetic
//!
//! Every generator in this crate is written against [`Word`], so the same
//! transition function serves both the 32-bit and 64-bit variants. All
//! operations wrap modulo 2^BITS.

use std::fmt::Debug;
use std::ops::{BitOr, BitXor, BitXorAssign, Shl, Shr};

/// An unsigned machine word a generator state is built from
pub trait Word:
    Copy
    + Eq
    + Debug
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits
    const BITS: u32;
    /// Smallest representable value (always 0)
    const MIN: Self;
    /// Largest representable value (2^BITS - 1)
    const MAX: Self;

    /// Rotate left by `k` bits, `0 <= k < BITS`
    fn rotl(self, k: u32) -> Self;

    /// Addition modulo 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication modulo 2^BITS
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Keep the low `BITS` bits of a 64-bit value
    fn truncate_from(value: u64) -> Self;

    /// Zero-extend to 64 bits
    fn widen(self) -> u64;
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            #[inline(always)]
            fn rotl(self, k: u32) -> Self {
                debug_assert!(k < Self::BITS, "rotation {} out of range", k);
                // The mask keeps the right shift in range when k == 0.
                (self << k) | (self >> (Self::BITS.wrapping_sub(k) & (Self::BITS - 1)))
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn truncate_from(value: u64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// Rotate `x` left by `k` bits within its own width
///
/// # Example
/// ```
/// use xorshift::rotl;
///
/// assert_eq!(rotl(0x8000_0001u32, 1), 0x0000_0003);
/// assert_eq!(rotl(0xDEAD_BEEFu64, 0), 0xDEAD_BEEF);
/// ```
#[inline(always)]
pub fn rotl<W: Word>(x: W, k: u32) -> W {
    x.rotl(k)
}
