// ============================================================================
// Machine Words
// Fixed-size unsigned storage units and their double-word primitives
// ============================================================================

use std::fmt::Debug;
use std::hash::Hash;

/// An unsigned machine word from which wide integers are assembled.
///
/// Every primitive that can carry out of a single word is computed in the
/// associated double-word type, so the engine never depends on a particular
/// native extended-width integer.
pub trait Word: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Number of bits in one word
    const BITS: u32;
    /// All bits clear
    const ZERO: Self;
    /// Least significant bit set
    const ONE: Self;
    /// All bits set
    const MAX: Self;

    /// `self + rhs + carry`, returning the sum word and the carry out.
    fn add_carry(self, rhs: Self, carry: bool) -> (Self, bool);

    /// `self - rhs - borrow`, returning the difference word and the borrow out.
    fn sub_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// `self * rhs + addend + carry` in double-word precision, as `(low, high)`.
    ///
    /// Cannot overflow: `(2^w - 1)^2 + 2(2^w - 1) = 2^2w - 1`.
    fn mul_add_carry(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self);

    /// Divides the double word `(high, low)` by `divisor`, returning
    /// `(quotient, remainder)`. Requires `high < divisor`.
    fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self);

    /// Truncating conversion from the low bits of a `u128`
    fn from_u128(value: u128) -> Self;

    /// Zero-extending conversion into a `u128`
    fn to_u128(self) -> u128;

    fn leading_zeros(self) -> u32;
    fn count_ones(self) -> u32;

    fn not(self) -> Self;
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;

    /// Left shift by `0..BITS`
    fn shl(self, amount: u32) -> Self;

    /// Logical right shift by `0..BITS`
    fn shr(self, amount: u32) -> Self;
}

macro_rules! impl_word {
    ($t:ty, $double:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn add_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, c1) = self.overflowing_add(rhs);
                let (sum, c2) = sum.overflowing_add(carry as $t);
                (sum, c1 | c2)
            }

            #[inline(always)]
            fn sub_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (diff, b1) = self.overflowing_sub(rhs);
                let (diff, b2) = diff.overflowing_sub(borrow as $t);
                (diff, b1 | b2)
            }

            #[inline(always)]
            fn mul_add_carry(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self) {
                let wide = (self as $double) * (rhs as $double)
                    + (addend as $double)
                    + (carry as $double);
                (wide as $t, (wide >> <$t>::BITS) as $t)
            }

            #[inline(always)]
            fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
                debug_assert!(high < divisor);
                let dividend = ((high as $double) << <$t>::BITS) | (low as $double);
                let divisor = divisor as $double;
                ((dividend / divisor) as $t, (dividend % divisor) as $t)
            }

            #[inline(always)]
            fn from_u128(value: u128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline(always)]
            fn not(self) -> Self {
                !self
            }

            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline(always)]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline(always)]
            fn shl(self, amount: u32) -> Self {
                self << amount
            }

            #[inline(always)]
            fn shr(self, amount: u32) -> Self {
                self >> amount
            }
        }
    };
}

impl_word!(u8, u16);
impl_word!(u16, u32);
impl_word!(u32, u64);
impl_word!(u64, u128);
