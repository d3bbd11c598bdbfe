// ============================================================================
// Wide Integer
// Statically sized two's-complement integers built from machine words
// ============================================================================

use super::word::Word;
use crate::numeric::Limits;
use std::cmp::Ordering;
use std::fmt;

/// Fixed-width integer stored as `N` words, least significant first.
///
/// The value is the two's-complement interpretation of all `N * W::BITS`
/// bits when `SIGNED` is true, and the plain binary interpretation
/// otherwise. The word count never changes: every operation produces a new
/// value of a statically known width.
///
/// # Example
/// ```
/// use fixpoint::wide::WideInt;
///
/// type I128 = WideInt<2>;
/// let third = I128::from(1i64 << 50) / I128::from(3);
/// assert_eq!(third.to_i128(), Some((1i128 << 50) / 3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideInt<const N: usize, const SIGNED: bool = true, W: Word = u64> {
    pub(crate) words: [W; N],
}

impl<const N: usize, const S: bool, W: Word> WideInt<N, S, W> {
    /// Total number of stored bits
    pub const BITS: u32 = N as u32 * W::BITS;

    /// Number of value bits, excluding the sign bit
    pub const DIGITS: u32 = Self::BITS - S as u32;

    /// Zero value
    pub const ZERO: Self = Self {
        words: [W::ZERO; N],
    };

    /// All bits set (`-1` when signed, maximum when unsigned)
    pub const ONES: Self = Self { words: [W::MAX; N] };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a word sequence, least significant word first.
    ///
    /// The words are taken as-is; no extension or truncation happens.
    #[inline]
    pub const fn from_words(words: [W; N]) -> Self {
        Self { words }
    }

    /// One
    #[inline]
    pub fn one() -> Self {
        let mut words = [W::ZERO; N];
        words[0] = W::ONE;
        Self { words }
    }

    /// Create from a native signed integer, sign-extending or truncating.
    pub fn from_i128(value: i128) -> Self {
        let fill = if value < 0 { W::MAX } else { W::ZERO };
        let mut words = [fill; N];
        for (i, word) in words.iter_mut().enumerate() {
            let shift = i as u32 * W::BITS;
            if shift >= 128 {
                break;
            }
            *word = W::from_u128((value >> shift) as u128);
        }
        Self { words }
    }

    /// Create from a native unsigned integer, zero-extending or truncating.
    pub fn from_u128(value: u128) -> Self {
        let mut words = [W::ZERO; N];
        for (i, word) in words.iter_mut().enumerate() {
            let shift = i as u32 * W::BITS;
            if shift >= 128 {
                break;
            }
            *word = W::from_u128(value >> shift);
        }
        Self { words }
    }

    /// Mask with the low `count` bits set. `count >= BITS` yields all ones.
    #[inline]
    pub fn low_mask(count: u32) -> Self {
        !(Self::ONES << count)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The word sequence, least significant word first.
    #[inline]
    pub const fn words(&self) -> &[W; N] {
        &self.words
    }

    /// Least significant word
    #[inline]
    pub fn low_word(&self) -> W {
        self.words[0]
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == W::ZERO)
    }

    /// Check if the most significant stored bit is set.
    #[inline]
    pub(crate) fn top_bit(&self) -> bool {
        self.words[N - 1].shr(W::BITS - 1) == W::ONE
    }

    /// Check if value is negative (always false when unsigned).
    #[inline]
    pub fn is_negative(&self) -> bool {
        S && self.top_bit()
    }

    /// Word used to extend this value to a wider width.
    #[inline]
    pub(crate) fn extension(&self) -> W {
        if self.is_negative() {
            W::MAX
        } else {
            W::ZERO
        }
    }

    #[inline]
    pub(crate) fn word_or_extension(&self, index: usize) -> W {
        if index < N {
            self.words[index]
        } else {
            self.extension()
        }
    }

    /// Number of leading zero bits across all words
    pub fn leading_zeros(&self) -> u32 {
        let mut total = 0;
        for word in self.words.iter().rev() {
            let lz = word.leading_zeros();
            total += lz;
            if lz < W::BITS {
                break;
            }
        }
        total
    }

    /// Number of set bits across all words
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Minimum number of value bits (excluding a sign bit) needed to hold
    /// this value: `bit_length(5) == 3`, `bit_length(-1) == 0`,
    /// `bit_length(-128) == 7`.
    pub fn bit_length(&self) -> u32 {
        if self.is_negative() {
            Self::BITS - (!*self).leading_zeros()
        } else {
            Self::BITS - self.leading_zeros()
        }
    }

    /// Check whether the value is representable with `digits` value bits
    /// and the given signedness.
    pub fn fits(&self, digits: u32, signed: bool) -> bool {
        if self.is_negative() && !signed {
            return false;
        }
        self.bit_length() <= digits
    }

    // ========================================================================
    // Width and Signedness Changes
    // ========================================================================

    /// Change the word count and/or signedness.
    ///
    /// Widening sign-extends when the source is signed and zero-extends
    /// otherwise; narrowing keeps the low words.
    pub fn resize<const M: usize, const S2: bool>(self) -> WideInt<M, S2, W> {
        let mut words = [W::ZERO; M];
        for (i, word) in words.iter_mut().enumerate() {
            *word = self.word_or_extension(i);
        }
        WideInt { words }
    }

    /// Reinterpret the same bits with another signedness.
    #[inline]
    pub fn reinterpret<const S2: bool>(self) -> WideInt<N, S2, W> {
        WideInt { words: self.words }
    }

    /// Keep the low `width` bits and extend them back to the full width,
    /// sign-extending from bit `width - 1` when `signed`.
    pub fn truncate_to(self, width: u32, signed: bool) -> Self {
        if width == 0 {
            return Self::ZERO;
        }
        if width >= Self::BITS {
            return self;
        }
        let spare = Self::BITS - width;
        let high = self.reinterpret::<true>() << spare;
        if signed {
            (high >> spare).reinterpret()
        } else {
            (high.reinterpret::<false>() >> spare).reinterpret()
        }
    }

    /// Absolute value as an unsigned integer of the same width.
    pub fn unsigned_abs(self) -> WideInt<N, false, W> {
        if self.is_negative() {
            self.wrapping_neg().reinterpret()
        } else {
            self.reinterpret()
        }
    }

    /// Convert to `i128` if the value fits.
    pub fn to_i128(&self) -> Option<i128> {
        if !self.fits(127, true) {
            return None;
        }
        Some(self.low_bits_u128() as i128)
    }

    /// Convert to `u128` if the value fits.
    pub fn to_u128(&self) -> Option<u128> {
        if !self.fits(128, false) {
            return None;
        }
        Some(self.low_bits_u128())
    }

    /// Low 128 bits, extended with the sign when the width is smaller.
    pub(crate) fn low_bits_u128(&self) -> u128 {
        let mut bits = 0u128;
        let mut shift = 0u32;
        let mut i = 0;
        while shift < 128 {
            bits |= self.word_or_extension(i).to_u128() << shift;
            shift += W::BITS;
            i += 1;
        }
        bits
    }

    /// Lossy conversion to `f64`.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.unsigned_abs();
        let radix = 2f64.powi(W::BITS as i32);
        let value = magnitude
            .words
            .iter()
            .rev()
            .fold(0f64, |acc, w| acc * radix + w.to_u128() as f64);
        if self.is_negative() {
            -value
        } else {
            value
        }
    }
}

// ============================================================================
// Limits
// ============================================================================

impl<const N: usize, const S: bool, W: Word> Limits for WideInt<N, S, W> {
    const DIGITS: u32 = N as u32 * W::BITS - S as u32;
    const IS_SIGNED: bool = S;

    fn max_value() -> Self {
        Self::low_mask(Self::DIGITS)
    }

    fn min_positive() -> Self {
        Self::one()
    }

    fn lowest() -> Self {
        if S {
            !Self::low_mask(Self::DIGITS)
        } else {
            Self::ZERO
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<const N: usize, const S: bool, W: Word> Ord for WideInt<N, S, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // The sign bit carries negative weight: a negative value is smaller
        // than any non-negative one regardless of the remaining words.
        match (self.is_negative(), other.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {},
        }
        for (lhs, rhs) in self.words.iter().rev().zip(other.words.iter().rev()) {
            match lhs.cmp(rhs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<const N: usize, const S: bool, W: Word> PartialOrd for WideInt<N, S, W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize, const S: bool, W: Word> Default for WideInt<N, S, W> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Conversion from Native Integers
// ============================================================================

macro_rules! from_native {
    ($via:ident: $($t:ty),*) => {
        $(
            impl<const N: usize, const S: bool, W: Word> From<$t> for WideInt<N, S, W> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$via(value as _)
                }
            }
        )*
    };
}

from_native!(from_i128: i8, i16, i32, i64, i128, isize);
from_native!(from_u128: u8, u16, u32, u64, u128, usize);

// ============================================================================
// Display and Debug
// ============================================================================

/// Decimal digits of an unsigned wide integer, most significant first.
///
/// Digits are produced by dividing by successive powers of ten, so no
/// buffer proportional to the width is needed.
pub struct DecimalDigits<const N: usize, W: Word> {
    rest: WideInt<N, false, W>,
    power: WideInt<N, false, W>,
    remaining: usize,
}

impl<const N: usize, W: Word> DecimalDigits<N, W> {
    pub(crate) fn new(value: WideInt<N, false, W>) -> Self {
        let ten = W::from_u128(10);
        let (limit, _) = value.div_rem_word(ten);
        let mut power = WideInt::<N, false, W>::one();
        let mut remaining = 1;
        while power <= limit {
            power = power.wrapping_mul(WideInt::from(10u8));
            remaining += 1;
        }
        Self {
            rest: value,
            power,
            remaining,
        }
    }
}

impl<const N: usize, W: Word> Iterator for DecimalDigits<N, W> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let (digit, rest) = self.rest.div_rem_unsigned(self.power);
        self.rest = rest;
        self.power = self.power.div_rem_word(W::from_u128(10)).0;
        self.remaining -= 1;
        Some(digit.low_word().to_u128() as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, W: Word> ExactSizeIterator for DecimalDigits<N, W> {}

impl<const N: usize, const S: bool, W: Word> WideInt<N, S, W> {
    /// Decimal digits of the magnitude, most significant first.
    pub fn decimal_digits(&self) -> DecimalDigits<N, W> {
        DecimalDigits::new(self.unsigned_abs())
    }
}

impl<const N: usize, const S: bool, W: Word> fmt::Display for WideInt<N, S, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        for digit in self.decimal_digits() {
            fmt::Write::write_char(f, char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

impl<const N: usize, const S: bool, W: Word> fmt::Debug for WideInt<N, S, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if S { 'i' } else { 'u' };
        write!(f, "WideInt<{}{}>({})", sign, Self::BITS, self)
    }
}
