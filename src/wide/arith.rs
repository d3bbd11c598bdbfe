// ============================================================================
// Wide Integer Arithmetic
// Carry/borrow propagation, schoolbook multiply, long division and shifts
// ============================================================================
//
// All operations here wrap at the type's width. Range handling (saturation,
// checked failure) belongs to the overflow policies layered on top.

use super::wide_int::WideInt;
use super::word::Word;
use crate::numeric::{NumericError, NumericResult};
use std::ops::{
    Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub,
};

impl<const N: usize, const S: bool, W: Word> WideInt<N, S, W> {
    // ========================================================================
    // Add / Subtract / Negate
    // ========================================================================

    /// Word-wise addition from least to most significant word; the final
    /// carry is discarded.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let mut words = self.words;
        let mut carry = false;
        for (word, r) in words.iter_mut().zip(rhs.words.iter()) {
            let (sum, c) = word.add_carry(*r, carry);
            *word = sum;
            carry = c;
        }
        Self { words }
    }

    /// Word-wise subtraction from least to most significant word; the final
    /// borrow is discarded.
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let mut words = self.words;
        let mut borrow = false;
        for (word, r) in words.iter_mut().zip(rhs.words.iter()) {
            let (diff, b) = word.sub_borrow(*r, borrow);
            *word = diff;
            borrow = b;
        }
        Self { words }
    }

    /// Two's-complement negation (`!x + 1`).
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        (!self).wrapping_add(Self::one())
    }

    // ========================================================================
    // Multiply
    // ========================================================================

    /// Schoolbook multiplication truncated to `N` words.
    ///
    /// Each word pair product is formed in double-word precision and
    /// accumulated into the position `i + j`; positions past the last word
    /// are dropped. Truncated two's-complement multiplication gives the
    /// correct low bits for signed operands too.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut words = [W::ZERO; N];
        for i in 0..N {
            if self.words[i] == W::ZERO {
                continue;
            }
            let mut carry = W::ZERO;
            for j in 0..N - i {
                let (low, high) = self.words[i].mul_add_carry(rhs.words[j], words[i + j], carry);
                words[i + j] = low;
                carry = high;
            }
        }
        Self { words }
    }

    /// Full-precision product in an `M`-word result.
    ///
    /// Both operands are extended to `M` words first, so the product is exact
    /// whenever `M >= 2 * N`.
    pub fn widening_mul<const M: usize>(self, rhs: Self) -> WideInt<M, S, W> {
        self.resize::<M, S>().wrapping_mul(rhs.resize::<M, S>())
    }

    // ========================================================================
    // Divide / Modulo
    // ========================================================================

    /// Quotient and remainder.
    ///
    /// The quotient truncates toward zero and the remainder takes the sign
    /// of the dividend. `lowest / -1` wraps to `lowest`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div_rem(self, rhs: Self) -> NumericResult<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let (quotient, remainder) = self.unsigned_abs().div_rem_unsigned(rhs.unsigned_abs());
        let quotient: Self = quotient.reinterpret();
        let remainder: Self = remainder.reinterpret();
        let quotient = if self.is_negative() != rhs.is_negative() {
            quotient.wrapping_neg()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg()
        } else {
            remainder
        };
        Ok((quotient, remainder))
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Left shift; whole words move first, then bits carry between adjacent
    /// words. Shifting by `BITS` or more yields zero.
    pub fn wrapping_shl(self, amount: u32) -> Self {
        if amount >= Self::BITS {
            return Self::ZERO;
        }
        let word_shift = (amount / W::BITS) as usize;
        let bit_shift = amount % W::BITS;
        let mut words = [W::ZERO; N];
        for i in word_shift..N {
            let src = i - word_shift;
            let mut word = self.words[src].shl(bit_shift);
            if bit_shift > 0 && src > 0 {
                word = word.or(self.words[src - 1].shr(W::BITS - bit_shift));
            }
            words[i] = word;
        }
        Self { words }
    }

    /// Right shift; arithmetic (sign-replicating) for signed values and
    /// logical for unsigned ones. Shifting by `BITS` or more yields zero or
    /// all sign bits.
    pub fn wrapping_shr(self, amount: u32) -> Self {
        let fill = self.extension();
        if amount >= Self::BITS {
            return Self { words: [fill; N] };
        }
        let word_shift = (amount / W::BITS) as usize;
        let bit_shift = amount % W::BITS;
        let mut words = [fill; N];
        for (i, word) in words.iter_mut().enumerate() {
            let src = i + word_shift;
            let low = self.word_or_extension(src);
            *word = if bit_shift == 0 {
                low
            } else {
                let high = self.word_or_extension(src + 1);
                low.shr(bit_shift).or(high.shl(W::BITS - bit_shift))
            };
        }
        Self { words }
    }

    /// Left shift that also reports whether any significant bit (or the
    /// sign) was lost.
    pub fn overflowing_shl(self, amount: u32) -> (Self, bool) {
        if amount >= Self::BITS {
            return (Self::ZERO, !self.is_zero());
        }
        let shifted = self.wrapping_shl(amount);
        (shifted, shifted.wrapping_shr(amount) != self)
    }
}

// ============================================================================
// Unsigned Long Division
// ============================================================================

impl<const N: usize, W: Word> WideInt<N, false, W> {
    /// Divide by a single word, walking from the most significant word down.
    ///
    /// `divisor` must be non-zero.
    pub fn div_rem_word(self, divisor: W) -> (Self, W) {
        let mut words = [W::ZERO; N];
        let mut remainder = W::ZERO;
        for i in (0..N).rev() {
            let (q, r) = W::div_wide(remainder, self.words[i], divisor);
            words[i] = q;
            remainder = r;
        }
        (Self { words }, remainder)
    }

    /// Long division of unsigned values. `divisor` must be non-zero.
    ///
    /// Single-word divisors take the word-at-a-time path; otherwise the
    /// quotient is built bit by bit, starting at the dividend's highest set
    /// bit.
    pub fn div_rem_unsigned(self, divisor: Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        if divisor.words[1..].iter().all(|w| *w == W::ZERO) {
            let (quotient, remainder) = self.div_rem_word(divisor.words[0]);
            let mut rem = Self::ZERO;
            rem.words[0] = remainder;
            return (quotient, rem);
        }
        if self < divisor {
            return (Self::ZERO, self);
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;
        let top = Self::BITS - self.leading_zeros();
        for bit in (0..top).rev() {
            let carried = remainder.top_bit();
            remainder = remainder.wrapping_shl(1);
            if self.bit(bit) {
                remainder.words[0] = remainder.words[0].or(W::ONE);
            }
            if carried || remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient.set_bit(bit);
            }
        }
        (quotient, remainder)
    }

    /// Integer square root: the largest `r` with `r * r <= self`.
    ///
    /// Binary digit-by-digit method, two radicand bits per step.
    pub fn isqrt(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let top = Self::BITS - self.leading_zeros();
        let mut bit = Self::one().wrapping_shl((top - 1) & !1);
        let mut remainder = self;
        let mut root = Self::ZERO;
        while !bit.is_zero() {
            let trial = root.wrapping_add(bit);
            if remainder >= trial {
                remainder = remainder.wrapping_sub(trial);
                root = root.wrapping_shr(1).wrapping_add(bit);
            } else {
                root = root.wrapping_shr(1);
            }
            bit = bit.wrapping_shr(2);
        }
        root
    }

    #[inline]
    fn bit(&self, index: u32) -> bool {
        let word = self.words[(index / W::BITS) as usize];
        word.shr(index % W::BITS).and(W::ONE) == W::ONE
    }

    #[inline]
    fn set_bit(&mut self, index: u32) {
        let slot = (index / W::BITS) as usize;
        self.words[slot] = self.words[slot].or(W::ONE.shl(index % W::BITS));
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Arithmetic operators wrap at the type's width. Division and remainder
// panic on a zero divisor, like the native integer operators.

impl<const N: usize, const S: bool, W: Word> Add for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<const N: usize, const S: bool, W: Word> Sub for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl<const N: usize, const S: bool, W: Word> Mul for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl<const N: usize, const S: bool, W: Word> Div for WideInt<N, S, W> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("WideInt division failed: {}", err),
        }
    }
}

impl<const N: usize, const S: bool, W: Word> Rem for WideInt<N, S, W> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("WideInt remainder failed: {}", err),
        }
    }
}

impl<const N: usize, const S: bool, W: Word> Neg for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const N: usize, const S: bool, W: Word> Shl<u32> for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.wrapping_shl(amount)
    }
}

impl<const N: usize, const S: bool, W: Word> Shr<u32> for WideInt<N, S, W> {
    type Output = Self;

    #[inline]
    fn shr(self, amount: u32) -> Self {
        self.wrapping_shr(amount)
    }
}

impl<const N: usize, const S: bool, W: Word> Not for WideInt<N, S, W> {
    type Output = Self;

    fn not(self) -> Self {
        let mut words = self.words;
        for word in words.iter_mut() {
            *word = word.not();
        }
        Self { words }
    }
}

macro_rules! bitwise_op {
    ($trait_name:ident, $op:ident, $method:ident) => {
        impl<const N: usize, const S: bool, W: Word> $trait_name for WideInt<N, S, W> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                let mut words = self.words;
                for (word, r) in words.iter_mut().zip(rhs.words.iter()) {
                    *word = Word::$method(*word, *r);
                }
                Self { words }
            }
        }
    };
}

bitwise_op!(BitAnd, bitand, and);
bitwise_op!(BitOr, bitor, or);
bitwise_op!(BitXor, bitxor, xor);
