// ============================================================================
// Scaled Arithmetic
// Rescale-before-combine arithmetic, shifts, conversion and comparison
// ============================================================================
//
// Every operation computes the exact result in an accumulator wide enough
// for any pair of operands, then hands it to the result layout's policies:
//   add / subtract -> align to the finer exponent (AlignAcc), exact
//   multiply       -> full product (Acc), exponent = sum
//   divide         -> rational quantization (LongAcc), one rounding step
//   square root    -> integer root with guard and sticky bits (LongAcc)

use super::value::Scaled;
use crate::compose::{
    quantize_quotient, settle, Difference, Layout, Negated, Product, Quotient, Rescaled, Shifted,
    Sum,
};
use crate::numeric::{NumericError, NumericResult};
use crate::wide::{Acc, AlignAcc, LongAcc, Raw, WideInt};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

/// Shift amounts past this are equivalent to shifting out every bit
const SHIFT_LIMIT: u32 = 1024;

/// Unsigned radicand of a square root
type Radicand = WideInt<32, false>;

/// Raw value of `value * 2^from` expressed at the finer exponent `to`.
#[inline]
fn align(raw: Raw, from: i32, to: i32) -> AlignAcc {
    let wide: AlignAcc = raw.resize();
    wide << (from - to) as u32
}

impl<L: Layout> Scaled<L> {
    // ========================================================================
    // Add / Subtract
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum does not fit [`Sum<L, R>`] and its
    /// overflow policy is checked.
    pub fn checked_add<R: Layout>(self, rhs: Scaled<R>) -> NumericResult<Scaled<Sum<L, R>>> {
        let exponent = <Sum<L, R>>::EXPONENT;
        let sum = align(self.raw(), L::EXPONENT, exponent) + align(rhs.raw(), R::EXPONENT, exponent);
        settle::<Sum<L, R>, 13>(sum, exponent).map(Scaled::from_bits)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference does not fit
    /// [`Difference<L, R>`] and its overflow policy is checked.
    pub fn checked_sub<R: Layout>(
        self,
        rhs: Scaled<R>,
    ) -> NumericResult<Scaled<Difference<L, R>>> {
        let exponent = <Difference<L, R>>::EXPONENT;
        let difference =
            align(self.raw(), L::EXPONENT, exponent) - align(rhs.raw(), R::EXPONENT, exponent);
        settle::<Difference<L, R>, 13>(difference, exponent).map(Scaled::from_bits)
    }

    // ========================================================================
    // Multiply / Divide / Remainder
    // ========================================================================

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product does not fit [`Product<L, R>`] and
    /// its overflow policy is checked.
    pub fn checked_mul<R: Layout>(self, rhs: Scaled<R>) -> NumericResult<Scaled<Product<L, R>>> {
        let product: Acc = self.raw().widening_mul(rhs.raw());
        settle::<Product<L, R>, 8>(product, L::EXPONENT + R::EXPONENT).map(Scaled::from_bits)
    }

    /// Checked division into the deduced [`Quotient<L, R>`] layout.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient does not fit under the checked policy
    pub fn checked_div<R: Layout>(self, rhs: Scaled<R>) -> NumericResult<Scaled<Quotient<L, R>>> {
        self.divide_to::<Quotient<L, R>, R>(rhs)
    }

    /// Division into a caller-chosen layout.
    ///
    /// The quotient is computed exactly as a rational and rounded once with
    /// `D`'s rounding policy, so `D` decides the precision of the result.
    /// Native rounding truncates toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient does not fit `D` under the checked policy
    ///
    /// # Example
    /// ```
    /// use fixpoint::compose::Spec;
    /// use fixpoint::policy::NearestEven;
    /// use fixpoint::scaled::Fixed;
    ///
    /// let one = Fixed::<15, 0>::from_int(1).unwrap();
    /// let three = Fixed::<15, 0>::from_int(3).unwrap();
    /// let third = one.divide_to::<Spec<15, -8, true, NearestEven>, _>(three).unwrap();
    /// assert_eq!(third.raw_i128(), 85);
    /// ```
    pub fn divide_to<D: Layout, R: Layout>(self, rhs: Scaled<R>) -> NumericResult<Scaled<D>> {
        quantize_quotient::<D, 32>(
            self.raw().resize(),
            rhs.raw().resize(),
            L::EXPONENT - R::EXPONENT,
        )
        .map(Scaled::from_bits)
    }

    /// Checked remainder of two values with the same layout.
    ///
    /// The remainder takes the sign of the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        self.raw().checked_rem(rhs.raw()).map(Self::from_bits)
    }

    // ========================================================================
    // Negate / Absolute Value
    // ========================================================================

    /// Checked negation into [`Negated<L>`].
    ///
    /// # Errors
    /// Returns `Overflow` if the negation does not fit under the checked
    /// policy (e.g. the lowest value of a fixed-width signed layout).
    pub fn checked_neg(self) -> NumericResult<Scaled<Negated<L>>> {
        let wide: Acc = self.raw().resize();
        settle::<Negated<L>, 8>(wide.wrapping_neg(), L::EXPONENT).map(Scaled::from_bits)
    }

    /// Checked absolute value in the same layout.
    ///
    /// # Errors
    /// Returns `Overflow` for the lowest value under the checked policy.
    pub fn checked_abs(self) -> NumericResult<Self> {
        let wide: Acc = self.raw().resize();
        let magnitude = if wide.is_negative() {
            wide.wrapping_neg()
        } else {
            wide
        };
        settle::<L, 8>(magnitude, L::EXPONENT).map(Self::from_bits)
    }

    // ========================================================================
    // Square Root / Floor
    // ========================================================================

    /// Square root in the same layout, rounded once with the layout's
    /// rounding policy.
    ///
    /// The root is solved on a widened integer with two guard bits and a
    /// sticky bit, so every rounding mode sees the exact root.
    ///
    /// # Errors
    /// - `InvalidInput` for a negative value
    /// - `Overflow` if the root does not fit under the checked policy
    pub fn checked_sqrt(self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::InvalidInput);
        }
        // root raw = sqrt(raw * 2^-E); scaling the radicand by 4^guard
        // keeps `guard` extra bits, and an even total shift stays exact
        let fraction_bits = -L::EXPONENT;
        let guard = if fraction_bits >= 0 {
            2
        } else {
            (1 - fraction_bits) / 2 + 2
        };
        let scale = (fraction_bits + 2 * guard) as u32;
        let radicand: Radicand = self.raw().unsigned_abs().resize::<32, false>() << scale;
        let root = radicand.isqrt();
        let sticky = if root.wrapping_mul(root) == radicand {
            Radicand::ZERO
        } else {
            Radicand::one()
        };
        let bits: LongAcc = ((root << 1) | sticky).reinterpret();
        settle::<L, 32>(bits, L::EXPONENT - guard - 1).map(Self::from_bits)
    }

    /// Largest integer not greater than this value, in the same layout.
    ///
    /// # Errors
    /// Returns `Overflow` if that integer lies below the layout's range
    /// under the checked policy.
    pub fn floor(self) -> NumericResult<Self> {
        if L::EXPONENT >= 0 {
            return Ok(self);
        }
        let wide: Acc = self.raw().resize();
        let integer = wide >> L::EXPONENT.unsigned_abs();
        settle::<L, 8>(integer, 0).map(Self::from_bits)
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Multiply by `2^amount`, keeping the layout.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit under the checked
    /// policy.
    pub fn checked_shl(self, amount: u32) -> NumericResult<Self> {
        let wide: Acc = self.raw().resize();
        let exponent = L::EXPONENT + amount.min(SHIFT_LIMIT) as i32;
        settle::<L, 8>(wide, exponent).map(Self::from_bits)
    }

    /// Divide by `2^amount`, keeping the layout and rounding with its
    /// rounding policy.
    ///
    /// # Errors
    /// Returns `Overflow` only if rounding away from zero leaves the range
    /// under the checked policy.
    pub fn checked_shr(self, amount: u32) -> NumericResult<Self> {
        let wide: Acc = self.raw().resize();
        let exponent = L::EXPONENT - amount.min(SHIFT_LIMIT) as i32;
        settle::<L, 8>(wide, exponent).map(Self::from_bits)
    }

    /// Multiply by the constant `2^N` into [`Shifted<L, N>`], which grows
    /// by `N` digits when `L` is elastic.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit under the checked
    /// policy.
    pub fn shl_const<const N: u32>(self) -> NumericResult<Scaled<Shifted<L, N>>> {
        let wide: Acc = self.raw().resize();
        settle::<Shifted<L, N>, 8>(wide, L::EXPONENT + N as i32).map(Scaled::from_bits)
    }

    // ========================================================================
    // Conversion Between Layouts
    // ========================================================================

    /// Convert into layout `D`: rescale, then round with `D`'s rounding
    /// policy, then range-check with `D`'s overflow policy.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit `D` under the checked
    /// policy.
    pub fn convert<D: Layout>(self) -> NumericResult<Scaled<D>> {
        let wide: Acc = self.raw().resize();
        settle::<D, 8>(wide, L::EXPONENT).map(Scaled::from_bits)
    }

    /// Move to exponent `E`, keeping digits and policies.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit the rescaled layout
    /// under the checked policy.
    pub fn rescale<const E: i32>(self) -> NumericResult<Scaled<Rescaled<L, E>>> {
        self.convert()
    }

    /// Exact comparison with a value of any layout.
    pub fn cmp_value<R: Layout>(&self, other: &Scaled<R>) -> Ordering {
        if L::EXPONENT == R::EXPONENT {
            return self.raw().cmp(&other.raw());
        }
        let common = L::EXPONENT.min(R::EXPONENT);
        align(self.raw(), L::EXPONENT, common).cmp(&align(other.raw(), R::EXPONENT, common))
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Operators panic where the checked form returns an error: division by zero,
// or an out-of-range result under the checked overflow policy.

macro_rules! binary_operator {
    ($trait_name:ident, $method:ident, $checked:ident, $output:ident, $what:literal) => {
        impl<L: Layout, R: Layout> $trait_name<Scaled<R>> for Scaled<L> {
            type Output = Scaled<$output<L, R>>;

            fn $method(self, rhs: Scaled<R>) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!(concat!("Scaled ", $what, " failed: {}"), err),
                }
            }
        }
    };
}

binary_operator!(Add, add, checked_add, Sum, "addition");
binary_operator!(Sub, sub, checked_sub, Difference, "subtraction");
binary_operator!(Mul, mul, checked_mul, Product, "multiplication");
binary_operator!(Div, div, checked_div, Quotient, "division");

impl<L: Layout> Rem for Scaled<L> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(value) => value,
            Err(err) => panic!("Scaled remainder failed: {}", err),
        }
    }
}

impl<L: Layout> Neg for Scaled<L> {
    type Output = Scaled<Negated<L>>;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(value) => value,
            Err(err) => panic!("Scaled negation failed: {}", err),
        }
    }
}

impl<L: Layout> Shl<u32> for Scaled<L> {
    type Output = Self;

    fn shl(self, amount: u32) -> Self {
        match self.checked_shl(amount) {
            Ok(value) => value,
            Err(err) => panic!("Scaled left shift failed: {}", err),
        }
    }
}

impl<L: Layout> Shr<u32> for Scaled<L> {
    type Output = Self;

    fn shr(self, amount: u32) -> Self {
        match self.checked_shr(amount) {
            Ok(value) => value,
            Err(err) => panic!("Scaled right shift failed: {}", err),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================
//
// Values of any two layouts compare exactly, after aligning both raw
// integers to the finer exponent.

impl<L: Layout, R: Layout> PartialEq<Scaled<R>> for Scaled<L> {
    #[inline]
    fn eq(&self, other: &Scaled<R>) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl<L: Layout> Eq for Scaled<L> {}

impl<L: Layout, R: Layout> PartialOrd<Scaled<R>> for Scaled<L> {
    #[inline]
    fn partial_cmp(&self, other: &Scaled<R>) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl<L: Layout> Ord for Scaled<L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Spec;
    use crate::numeric::{Limits, NumericError};
    use crate::policy::{
        CheckedOverflow, Elastic, NativeOverflow, NativeRounding, NearestEven, SaturatedOverflow,
    };
    use crate::scaled::{
        CheckedInt, ElasticFixed, ElasticInt, Fixed, RoundingFixed, SaturatingFixed,
        SaturatingInt, I16, I8,
    };

    type Q8 = Fixed<15, -8>;
    type UElastic8 = Scaled<Spec<8, 0, false, NativeRounding, NativeOverflow, Elastic>>;

    fn q8(value: f64) -> Q8 {
        Q8::from_f64(value).unwrap()
    }

    #[test]
    fn test_saturating_max_times_max_is_max() {
        let max = SaturatingInt::<15>::max_value();
        let product = max * max;
        assert_eq!(product.raw_i128(), 32767);
        assert_eq!(product, max);
    }

    #[test]
    fn test_wrapping_max_times_max_wraps() {
        let max = I16::max_value();
        let product = max * max;
        assert_eq!(product.raw_i128(), i16::MAX.wrapping_mul(i16::MAX) as i128);
        assert_eq!(product.raw_i128(), 1);
    }

    #[test]
    fn test_elastic_sum_grows() {
        let a = ElasticInt::<7>::max_value();
        let sum = a + a;
        assert_eq!(sum.digits(), 8);
        assert_eq!(sum.raw_i128(), 254);
    }

    #[test]
    fn test_elastic_unsigned_difference_is_signed() {
        let three = UElastic8::from_int(3).unwrap();
        let five = UElastic8::from_int(5).unwrap();
        let difference = three - five;
        assert_eq!(difference.raw_i128(), -2);
        assert_eq!(difference.digits(), 9);
    }

    #[test]
    fn test_add_rescales_coarser_operand() {
        let sum = q8(1.5) + I16::from_int(2).unwrap();
        assert_eq!(sum.exponent(), -8);
        assert_eq!(sum.digits(), 23);
        assert_eq!(sum.to_f64(), 3.5);
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = CheckedInt::<7>::from_int(100).unwrap();
        assert_eq!(a.checked_add(a), Err(NumericError::Overflow));
        assert_eq!(a.checked_sub(a).unwrap().raw_i128(), 0);
    }

    #[test]
    #[should_panic(expected = "Scaled addition failed")]
    fn test_add_operator_panics_on_checked_overflow() {
        let a = CheckedInt::<7>::from_int(100).unwrap();
        let _ = a + a;
    }

    #[test]
    fn test_add_across_extreme_exponents() {
        type Coarse = Fixed<7, 256>;
        type Fine = Fixed<7, -256>;
        let coarse = Coarse::from_raw(-128).unwrap();
        let fine = Fine::from_raw(-128).unwrap();
        // -128 * 2^512 - 128 at exponent -256 wraps to its low 256 bits
        let sum = coarse + fine;
        assert_eq!(sum.exponent(), -256);
        assert_eq!(sum.raw_i128(), -128);
        assert!(coarse < fine);
        assert!(Coarse::from_raw(1).unwrap() > Fine::from_raw(127).unwrap());

        type SatCoarse = SaturatingFixed<7, 256>;
        type SatFine = SaturatingFixed<7, -256>;
        let clamped = SatCoarse::max_value() + SatFine::max_value();
        assert_eq!(clamped.raw(), Raw::low_mask(255));
    }

    #[test]
    fn test_mul_adds_exponents() {
        type E8 = ElasticFixed<15, -8>;
        let product = E8::from_f64(1.5).unwrap() * E8::from_f64(-2.25).unwrap();
        assert_eq!(product.exponent(), -16);
        assert_eq!(product.digits(), 30);
        assert_eq!(product.to_f64(), -3.375);
    }

    #[test]
    fn test_division() {
        let quotient = q8(3.0) / I16::from_int(2).unwrap();
        assert_eq!(quotient.exponent(), -8);
        assert_eq!(quotient.to_f64(), 1.5);

        let seven = I16::from_int(7).unwrap();
        let two = I16::from_int(2).unwrap();
        assert_eq!((seven / two).raw_i128(), 3);
        assert_eq!((-seven).checked_div(two).unwrap().raw_i128(), -3);
        assert_eq!(seven.checked_div(I16::zero()), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_divide_to_rounds_once() {
        let one = I16::from_int(1).unwrap();
        let three = I16::from_int(3).unwrap();
        let third: Scaled<Spec<15, -8, true, NearestEven>> = one.divide_to(three).unwrap();
        assert_eq!(third.raw_i128(), 85);
        let two_thirds: RoundingFixed<15, -8> = (one + one).divide_to(three).unwrap();
        assert_eq!(two_thirds.raw_i128(), 171);
    }

    #[test]
    fn test_remainder_takes_dividend_sign() {
        let seven = I16::from_int(7).unwrap();
        let two = I16::from_int(2).unwrap();
        assert_eq!((seven % two).raw_i128(), 1);
        assert_eq!(((-seven).convert::<Spec<15>>().unwrap() % two).raw_i128(), -1);
        assert_eq!(seven.checked_rem(I16::zero()), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_negation() {
        assert_eq!((-I8::lowest()).raw_i128(), -128);
        assert_eq!(CheckedInt::<7>::lowest().checked_neg(), Err(NumericError::Overflow));
        let negated = -ElasticInt::<7>::lowest();
        assert_eq!(negated.digits(), 8);
        assert_eq!(negated.raw_i128(), 128);
    }

    #[test]
    fn test_abs() {
        assert_eq!(q8(-1.5).checked_abs().unwrap(), q8(1.5));
        assert_eq!(SaturatingInt::<7>::lowest().checked_abs().unwrap().raw_i128(), 127);
    }

    #[test]
    fn test_shifts() {
        assert_eq!((q8(1.5) >> 3).to_f64(), 0.1875);
        // Native rounding floors right shifts
        assert_eq!((q8(-1.5) >> 10).raw_i128(), -1);
        assert_eq!((RoundingFixed::<15, -8>::from_f64(-1.5).unwrap() >> 10).raw_i128(), 0);
        assert_eq!((I16::from_int(3).unwrap() << 14).raw_i128(), -16384);
        assert_eq!((SaturatingInt::<15>::from_int(3).unwrap() << 14).raw_i128(), 32767);
        assert_eq!((I16::from_int(3).unwrap() << 100).raw_i128(), 0);
    }

    #[test]
    fn test_shl_const_grows_elastic() {
        let shifted = ElasticInt::<7>::from_int(100).unwrap().shl_const::<4>().unwrap();
        assert_eq!(shifted.digits(), 11);
        assert_eq!(shifted.raw_i128(), 1600);
    }

    #[test]
    fn test_convert_saturates_to_narrow_maximum() {
        type WideSaturating = Scaled<Spec<63, 0, true, NativeRounding, SaturatedOverflow, Elastic>>;
        let wide = WideSaturating::from_int(150).unwrap();
        let narrow = wide.convert::<Spec<15, -8, true, NativeRounding, SaturatedOverflow>>().unwrap();
        assert_eq!(narrow.raw_i128(), 32767);

        let grown = wide.shl_const::<30>().unwrap();
        let clamped: SaturatingInt<15> = grown.convert().unwrap();
        assert_eq!(clamped.raw_i128(), 32767);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(q8(2.25).checked_sqrt(), Ok(q8(1.5)));
        assert_eq!(Q8::zero().checked_sqrt(), Ok(Q8::zero()));
        // sqrt(2) * 256 = 362.04
        assert_eq!(q8(2.0).checked_sqrt().unwrap().raw_i128(), 362);
        assert_eq!(Fixed::<15, -3>::from_int(2).unwrap().checked_sqrt().unwrap().raw_i128(), 11);
        assert_eq!(
            Scaled::<Spec<7, 2>>::from_int(64).unwrap().checked_sqrt().unwrap().raw_i128(),
            2
        );
        assert_eq!(q8(-0.25).checked_sqrt(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_sqrt_rounds_with_layout_policy() {
        // sqrt(3) * 4 = 6.93
        let floored = Fixed::<15, -2>::from_int(3).unwrap().checked_sqrt().unwrap();
        assert_eq!(floored.raw_i128(), 6);
        let nearest = RoundingFixed::<15, -2>::from_int(3).unwrap().checked_sqrt().unwrap();
        assert_eq!(nearest.raw_i128(), 7);
    }

    #[test]
    fn test_sqrt_of_small_fraction_grows() {
        // 3/256 has root 0.108, above the largest value 3/256
        type Tiny = SaturatingFixed<2, -8>;
        assert_eq!(Tiny::max_value().checked_sqrt(), Ok(Tiny::max_value()));

        type CheckedTiny = Scaled<Spec<2, -8, true, NativeRounding, CheckedOverflow>>;
        assert_eq!(
            CheckedTiny::max_value().checked_sqrt(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_floor() {
        assert_eq!(q8(-15.875).floor(), Ok(q8(-16.0)));
        assert_eq!(q8(1.5).floor(), Ok(q8(1.0)));
        assert_eq!(q8(3.0).floor(), Ok(q8(3.0)));
        assert_eq!(Q8::from_raw(-1).unwrap().floor(), Ok(q8(-1.0)));

        let coarse = Scaled::<Spec<7, 2>>::from_int(-12).unwrap();
        assert_eq!(coarse.floor(), Ok(coarse));
    }

    #[test]
    fn test_floor_below_range_follows_overflow_policy() {
        // -1/8 floors to -1, below the lowest value -1/2
        type Half = SaturatingFixed<2, -3>;
        assert_eq!(Half::from_raw(-1).unwrap().floor(), Ok(Half::lowest()));

        type CheckedHalf = Scaled<Spec<2, -3, true, NativeRounding, CheckedOverflow>>;
        assert_eq!(
            CheckedHalf::from_raw(-1).unwrap().floor(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_rescale() {
        let coarse = q8(1.75).rescale::<-2>().unwrap();
        assert_eq!(coarse.raw_i128(), 7);
        assert_eq!(coarse.digits(), 15);
        assert_eq!(coarse.exponent(), -2);

        // 460/256 floors to 7/4
        assert_eq!(Q8::from_raw(460).unwrap().rescale::<-2>().unwrap().raw_i128(), 7);

        let fine = q8(1.75).rescale::<-10>().unwrap();
        assert_eq!(fine.raw_i128(), 1792);
        assert_eq!(fine, q8(1.75));
    }

    #[test]
    fn test_cross_layout_comparison() {
        let two_q8 = q8(2.0);
        let two = I8::from_int(2).unwrap();
        assert_eq!(two_q8, two);
        assert!(q8(1.75) < two);
        assert!(two > q8(-100.0));
        assert_eq!(q8(0.5).cmp_value(&q8(0.5)), Ordering::Equal);
    }
}
