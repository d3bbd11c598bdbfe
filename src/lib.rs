// ============================================================================
// Fixpoint Library
// Composable fixed-point arithmetic over statically sized wide integers
// ============================================================================

//! # Fixpoint
//!
//! Fixed-point numbers whose width, scale and behavior are chosen at the
//! type level, and whose arithmetic results get their type deduced before
//! anything is computed.
//!
//! ## Features
//!
//! - **Wide integers** of any statically fixed width, built from machine words
//! - **Rounding policies**: ties-to-even, ties-away, ties-to-positive,
//!   toward zero, toward negative infinity, native
//! - **Overflow policies**: wrap, saturate, checked, undefined
//! - **Elastic growth**: results widen so that arithmetic never overflows
//! - **Exact decimal text** in both directions, with no floating point and
//!   no allocation
//!
//! ## Example
//!
//! ```rust
//! use fixpoint::prelude::*;
//!
//! // 7 value bits plus sign, scaled by 2^-3
//! let x = Fixed::<7, -3>::from_f64(-15.875).unwrap();
//! assert_eq!(x.to_string(), "-15.875");
//! assert_eq!(Fixed::<7, -3>::MAX_CHARS, 7);
//!
//! // Saturating values clamp instead of wrapping
//! let max = SaturatingInt::<15>::max_value();
//! assert_eq!(max * max, max);
//!
//! // Elastic values grow by one bit per addition
//! let a = ElasticInt::<8>::from_int(255).unwrap();
//! let sum = a + a;
//! assert_eq!(sum.digits(), 9);
//! assert_eq!(sum.to_string(), "510");
//!
//! // Parsing rounds once, with the destination's policy
//! let y: RoundingFixed<15, -2> = "0.375".parse().unwrap();
//! assert_eq!(y.to_string(), "0.5");
//! ```

pub mod compose;
pub mod numeric;
pub mod policy;
pub mod scaled;
pub mod text;
pub mod wide;

// Re-exports for convenience
pub mod prelude {
    pub use crate::compose::{Layout, Rescaled, Spec};
    pub use crate::numeric::{Limits, NumericError, NumericResult};
    pub use crate::policy::{
        CheckedOverflow, Elastic, FixedWidth, NativeOverflow, NativeRounding, Nearest, NearestAway,
        NearestEven, Overflow, Rounding, SaturatedOverflow, TieToPositive, TowardNegative,
        TowardZero, UndefinedOverflow,
    };
    pub use crate::scaled::{
        CheckedInt, ElasticFixed, ElasticInt, Fixed, RoundingFixed, SaturatingFixed, SaturatingInt,
        Scaled, UFixed,
    };
    pub use crate::text::FormatOptions;
    pub use crate::wide::WideInt;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_hundred_bit_division_is_exact() {
        type Wide100 = ElasticInt<100>;
        let dividend = Wide100::from_int(1i128 << 50).unwrap();
        let divisor = ElasticInt::<2>::from_int(3).unwrap();
        let quotient = dividend / divisor;
        assert_eq!(quotient.digits(), 100);
        assert_eq!(quotient.raw_i128(), (1i128 << 50) / 3);

        let engine = WideInt::<2>::from_i128(1 << 50) / WideInt::<2>::from_i128(3);
        assert_eq!(engine.to_i128(), Some((1i128 << 50) / 3));
    }

    #[test]
    fn test_exact_decimal_text() {
        let x = Fixed::<7, -3>::from_f64(-15.875).unwrap();
        let mut buf = [0u8; Fixed::<7, -3>::MAX_CHARS];
        let len = x.to_chars(&mut buf).unwrap();
        assert_eq!(len, 7);
        assert_eq!(&buf[..len], b"-15.875");
    }

    #[test]
    fn test_wide_saturating_value_clamps_when_narrowed() {
        type WideSaturating = Scaled<Spec<200, 0, true, NativeRounding, SaturatedOverflow, Elastic>>;
        type NarrowSaturating = Scaled<Spec<15, -8, true, NativeRounding, SaturatedOverflow>>;
        let wide = WideSaturating::from_int(150).unwrap();
        let narrow: NarrowSaturating = wide.convert().unwrap();
        assert_eq!(narrow.raw_i128(), 32767);
        assert_eq!(narrow, NarrowSaturating::max_value());
    }

    #[test]
    fn test_mixed_policies_pipeline() {
        let price: RoundingFixed<31, -16> = "101.37".parse().unwrap();
        let quantity = Fixed::<15, 0>::from_int(3).unwrap();
        let notional = price * quantity;
        assert_eq!(notional.exponent(), -16);
        let close: Fixed<47, -16> = "304.11".parse().unwrap();
        assert!((notional.to_f64() - close.to_f64()).abs() < 1e-3);

        let checked = CheckedInt::<7>::from_int(100).unwrap();
        assert_eq!(checked.checked_add(checked), Err(NumericError::Overflow));
        assert_eq!(
            checked.checked_div(CheckedInt::<7>::zero()),
            Err(NumericError::DivisionByZero)
        );
    }
}
