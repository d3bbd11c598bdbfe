// ============================================================================
// Scaled Value
// A raw integer paired with a compile-time layout
// ============================================================================

use crate::compose::{quantize_ratio, settle, Layout};
use crate::numeric::{Limits, NumericError, NumericResult};
use crate::wide::{Acc, LongAcc, Raw};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Largest power of ten a `Decimal` scale can express
const MAX_DECIMAL_SCALE: u32 = 28;

/// A fixed-point value: `raw * 2^L::EXPONENT`.
///
/// The raw integer always lies in the range of layout `L` (`L::DIGITS`
/// value bits, signed or not); every constructor and operation routes
/// through the layout's rounding and overflow policies to keep it there.
///
/// # Example
/// ```
/// use fixpoint::scaled::Fixed;
///
/// type Q3 = Fixed<7, -3>;
/// let x = Q3::from_f64(-15.875).unwrap();
/// assert_eq!(x.raw_i128(), -127);
/// assert_eq!(x.to_string(), "-15.875");
/// ```
pub struct Scaled<L> {
    raw: Raw,
    layout: PhantomData<fn() -> L>,
}

impl<L: Layout> Scaled<L> {
    /// Wrap an in-range raw integer.
    #[inline]
    pub(crate) fn from_bits(raw: Raw) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = L::VALID;
        Self {
            raw,
            layout: PhantomData,
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero value
    #[inline]
    pub fn zero() -> Self {
        Self::from_bits(Raw::ZERO)
    }

    /// Create from a raw integer, so that the value is `raw * 2^EXPONENT`.
    ///
    /// # Errors
    /// Returns `Overflow` if `raw` is out of range and the layout's overflow
    /// policy is checked.
    pub fn from_raw(raw: i128) -> NumericResult<Self> {
        Self::from_raw_wide(Raw::from(raw))
    }

    /// Create from a raw storage integer.
    ///
    /// # Errors
    /// Returns `Overflow` if `raw` is out of range and the layout's overflow
    /// policy is checked.
    pub fn from_raw_wide(raw: Raw) -> NumericResult<Self> {
        settle::<L, 4>(raw, L::EXPONENT).map(Self::from_bits)
    }

    /// Create from any native integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is out of range and the layout's
    /// overflow policy is checked.
    pub fn from_int<T>(value: T) -> NumericResult<Self>
    where
        Acc: From<T>,
    {
        settle::<L, 8>(Acc::from(value), 0).map(Self::from_bits)
    }

    /// Create from an `f64`.
    ///
    /// Binary floating-point values are exact dyadic rationals, so the only
    /// precision loss is the layout's own rounding.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinity
    /// - `Overflow` if out of range under the checked policy
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        let bits = value.to_bits();
        let sign = if bits >> 63 == 0 { 1i64 } else { -1i64 };
        let biased = ((bits >> 52) & 0x7FF) as i32;
        let fraction = (bits & 0x000F_FFFF_FFFF_FFFF) as i64;
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased - 1075)
        };
        settle::<L, 8>(Acc::from(sign * mantissa), exponent).map(Self::from_bits)
    }

    /// Create from the exact rational `numerator / denominator`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` if out of range under the checked policy
    pub fn from_ratio(numerator: i128, denominator: i128) -> NumericResult<Self> {
        quantize_ratio::<L, 32>(LongAcc::from(numerator), LongAcc::from(denominator), 0)
            .map(Self::from_bits)
    }

    /// Create from a `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries: the decimal is converted exactly and
    /// then rounded once by the layout.
    ///
    /// # Errors
    /// Returns `Overflow` if out of range under the checked policy.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let denominator = LongAcc::from(10i128.pow(value.scale()));
        quantize_ratio::<L, 32>(LongAcc::from(value.mantissa()), denominator, 0)
            .map(Self::from_bits)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw storage integer
    #[inline]
    pub fn raw(&self) -> Raw {
        self.raw
    }

    /// Raw integer as `i128`.
    ///
    /// Layouts wider than 127 digits can hold raw values outside `i128`;
    /// those are truncated to the low 128 bits.
    #[inline]
    pub fn raw_i128(&self) -> i128 {
        self.raw.low_bits_u128() as i128
    }

    /// Value bits of the layout, excluding the sign bit
    #[inline]
    pub fn digits(&self) -> u32 {
        L::DIGITS
    }

    /// Exponent of the layout
    #[inline]
    pub fn exponent(&self) -> i32 {
        L::EXPONENT
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    // ========================================================================
    // Conversion to Other Representations
    // ========================================================================

    /// Approximate value as `f64` (for display and interop).
    pub fn to_f64(&self) -> f64 {
        self.raw.to_f64() * 2f64.powi(L::EXPONENT)
    }

    /// Integer value, rounded with the layout's rounding policy.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value does not fit an `i128`.
    pub fn to_i128(&self) -> NumericResult<i128> {
        let wide: Acc = self.raw.resize();
        let integer = if L::EXPONENT >= 0 {
            let (shifted, lost) = wide.overflowing_shl(L::EXPONENT as u32);
            if lost {
                return Err(NumericError::Overflow);
            }
            shifted
        } else {
            L::POLICY
                .rounding
                .for_rescale()
                .shift_right(wide, L::EXPONENT.unsigned_abs())
        };
        integer.to_i128().ok_or(NumericError::Overflow)
    }

    /// Exact value as a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the value needs more than 28 fractional
    /// decimal digits or a mantissa wider than `Decimal` supports.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let mut mantissa: Acc = self.raw.resize();
        if L::EXPONENT >= 0 {
            let (shifted, lost) = mantissa.overflowing_shl(L::EXPONENT as u32);
            if lost {
                return Err(NumericError::InvalidInput);
            }
            let integer = shifted.to_i128().ok_or(NumericError::InvalidInput)?;
            return Decimal::try_from_i128_with_scale(integer, 0)
                .map_err(|_| NumericError::InvalidInput);
        }

        // raw / 2^k == raw * 5^k / 10^k once trailing factors of two are gone
        let mut fraction_bits = L::EXPONENT.unsigned_abs();
        while fraction_bits > 0 && !mantissa.is_zero() && mantissa.low_word() & 1 == 0 {
            mantissa = mantissa >> 1;
            fraction_bits -= 1;
        }
        if mantissa.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if fraction_bits > MAX_DECIMAL_SCALE {
            return Err(NumericError::InvalidInput);
        }
        let five = Acc::from(5u8);
        for _ in 0..fraction_bits {
            mantissa = mantissa.wrapping_mul(five);
        }
        let integer = mantissa.to_i128().ok_or(NumericError::InvalidInput)?;
        Decimal::try_from_i128_with_scale(integer, fraction_bits)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Limits
// ============================================================================

impl<L: Layout> Limits for Scaled<L> {
    const DIGITS: u32 = L::DIGITS;
    const IS_SIGNED: bool = L::SIGNED;

    /// `(2^DIGITS - 1) * 2^EXPONENT`
    fn max_value() -> Self {
        Self::from_bits(Raw::low_mask(L::DIGITS))
    }

    /// `2^EXPONENT`, the smallest positive value
    fn min_positive() -> Self {
        Self::from_bits(Raw::one())
    }

    /// `-2^DIGITS * 2^EXPONENT` when signed, zero otherwise
    fn lowest() -> Self {
        if L::SIGNED {
            Self::from_bits(!Raw::low_mask(L::DIGITS))
        } else {
            Self::zero()
        }
    }
}

// ============================================================================
// Standard Traits
// ============================================================================

impl<L> Clone for Scaled<L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Scaled<L> {}

impl<L: Layout> Default for Scaled<L> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<L> Hash for Scaled<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<L: Layout> fmt::Debug for Scaled<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if L::SIGNED { 'i' } else { 'u' };
        write!(
            f,
            "Scaled<{}{}, 2^{}>({}, raw={})",
            sign,
            L::DIGITS + L::SIGNED as u32,
            L::EXPONENT,
            self,
            self.raw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Spec;
    use crate::policy::{
        CheckedOverflow, FixedWidth, NativeRounding, NearestEven, SaturatedOverflow,
        TowardNegative,
    };
    use std::str::FromStr;

    type Q3 = Scaled<Spec<7, -3, true, NearestEven>>;
    type U8x4 = Scaled<Spec<8, 2, false>>;
    type SatI16 = Scaled<Spec<15, 0, true, NativeRounding, SaturatedOverflow, FixedWidth>>;
    type ChkI16 = Scaled<Spec<15, 0, true, NativeRounding, CheckedOverflow, FixedWidth>>;

    #[test]
    fn test_from_int() {
        assert_eq!(Q3::from_int(3).unwrap().raw_i128(), 24);
        assert_eq!(Q3::from_int(-16).unwrap().raw_i128(), -128);
        assert_eq!(U8x4::from_int(1020u32).unwrap().raw_i128(), 255);
        // 1021 / 4 = 255.25 truncated by native rounding (floor)
        assert_eq!(U8x4::from_int(1021u32).unwrap().raw_i128(), 255);
    }

    #[test]
    fn test_from_int_saturates() {
        assert_eq!(SatI16::from_int(5_000_000_000i64).unwrap().raw_i128(), 32767);
        assert_eq!(ChkI16::from_int(40_000), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Q3::from_f64(-15.875).unwrap().raw_i128(), -127);
        assert_eq!(Q3::from_f64(0.0625).unwrap().raw_i128(), 0); // tie to even
        assert_eq!(Q3::from_f64(0.1875).unwrap().raw_i128(), 2); // tie to even
        assert_eq!(Q3::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(Q3::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
        assert_eq!(Q3::from_f64(f64::MIN_POSITIVE).unwrap(), Q3::zero());
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(Q3::from_ratio(1, 3).unwrap().raw_i128(), 3);
        assert_eq!(Q3::from_ratio(-1, 3).unwrap().raw_i128(), -3);
        assert_eq!(Q3::from_ratio(1, 0), Err(NumericError::DivisionByZero));
        type Floor = Scaled<Spec<7, -3, true, TowardNegative>>;
        assert_eq!(Floor::from_ratio(-1, 3).unwrap().raw_i128(), -3);
        assert_eq!(Floor::from_ratio(1, 3).unwrap().raw_i128(), 2);
    }

    #[test]
    fn test_native_literal_routes_agree() {
        type Native3 = Scaled<Spec<7, -3>>;
        type Fine = Scaled<Spec<15, -4>>;
        for (numerator, places) in [(-625i64, 4u32), (625, 4), (-1, 2), (-15875, 3), (3, 1)] {
            let decimal = Decimal::new(numerator, places);
            let denominator = 10i128.pow(places);
            let expected = Native3::from_decimal(decimal).unwrap();
            let text = decimal.to_string();
            assert_eq!(text.parse::<Native3>().unwrap(), expected, "{}", text);
            assert_eq!(
                Native3::from_ratio(numerator as i128, denominator).unwrap(),
                expected,
                "{}",
                text
            );
            let float = numerator as f64 / denominator as f64;
            assert_eq!(Native3::from_f64(float).unwrap(), expected, "{}", text);
        }
        // -0.0625 lies half a unit below zero: every route floors
        let half_below = Native3::from_f64(-0.0625).unwrap();
        assert_eq!(half_below.raw_i128(), -1);
        let converted: Native3 = Fine::from_raw(-1).unwrap().convert().unwrap();
        assert_eq!(converted, half_below);
        assert_eq!(Native3::from_ratio(-1, 16).unwrap(), half_below);
        assert_eq!("-0.0625".parse::<Native3>().unwrap(), half_below);
    }

    #[test]
    fn test_decimal_round_trip() {
        let d = Decimal::from_str("-15.875").unwrap();
        let x = Q3::from_decimal(d).unwrap();
        assert_eq!(x.raw_i128(), -127);
        assert_eq!(x.to_decimal().unwrap(), d);

        let big = U8x4::from_int(1020u32).unwrap();
        assert_eq!(big.to_decimal().unwrap(), Decimal::from(1020));
    }

    #[test]
    fn test_to_decimal_too_precise() {
        type Tiny = Scaled<Spec<32, -40, false>>;
        let x = Tiny::from_raw(1).unwrap();
        assert_eq!(x.to_decimal(), Err(NumericError::InvalidInput));
        // Trailing factors of two do not count against the scale
        let y = Tiny::from_raw(1 << 20).unwrap();
        assert_eq!(
            y.to_decimal().unwrap(),
            Decimal::from_str("0.00000095367431640625").unwrap()
        );
    }

    #[test]
    fn test_to_i128_rounds() {
        assert_eq!(Q3::from_f64(2.5).unwrap().to_i128(), Ok(2));
        assert_eq!(Q3::from_f64(3.5).unwrap().to_i128(), Ok(4));
        assert_eq!(Q3::from_f64(-2.75).unwrap().to_i128(), Ok(-3));
        assert_eq!(U8x4::from_raw(3).unwrap().to_i128(), Ok(12));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Q3::from_raw(-127).unwrap().to_f64(), -15.875);
        assert_eq!(U8x4::from_raw(255).unwrap().to_f64(), 1020.0);
    }

    #[test]
    fn test_limits() {
        assert_eq!(Q3::max_value().raw_i128(), 127);
        assert_eq!(Q3::lowest().raw_i128(), -128);
        assert_eq!(Q3::min_positive().to_f64(), 0.125);
        assert_eq!(U8x4::lowest(), U8x4::zero());
        assert_eq!(U8x4::max_value().to_f64(), 1020.0);
        assert_eq!(<Q3 as Limits>::DIGITS, 7);
    }

    #[test]
    fn test_from_raw_through_policy() {
        assert_eq!(SatI16::from_raw(100_000).unwrap(), SatI16::max_value());
        assert_eq!(ChkI16::from_raw(-40_000), Err(NumericError::Overflow));
    }

    #[test]
    fn test_ordering() {
        let a = Q3::from_f64(-1.5).unwrap();
        let b = Q3::from_f64(0.25).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
