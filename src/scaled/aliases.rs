// ============================================================================
// Type Aliases
// Common layouts under short names
// ============================================================================

use super::value::Scaled;
use crate::compose::Spec;
use crate::policy::{
    CheckedOverflow, Elastic, FixedWidth, NativeOverflow, NativeRounding, NearestEven,
    SaturatedOverflow,
};

/// Signed fixed-point value with `D` value bits and exponent `E`, native
/// policies
pub type Fixed<const D: u32, const E: i32> = Scaled<Spec<D, E>>;

/// Unsigned fixed-point value with `D` value bits and exponent `E`
pub type UFixed<const D: u32, const E: i32> = Scaled<Spec<D, E, false>>;

/// Signed fixed-point value that rounds to nearest (ties to even)
pub type RoundingFixed<const D: u32, const E: i32> = Scaled<Spec<D, E, true, NearestEven>>;

/// Signed fixed-point value that saturates on overflow
pub type SaturatingFixed<const D: u32, const E: i32> =
    Scaled<Spec<D, E, true, NativeRounding, SaturatedOverflow, FixedWidth>>;

/// Signed fixed-point value whose arithmetic grows to stay exact
pub type ElasticFixed<const D: u32, const E: i32> =
    Scaled<Spec<D, E, true, NativeRounding, NativeOverflow, Elastic>>;

/// Signed integer whose arithmetic grows to stay exact
pub type ElasticInt<const D: u32> = ElasticFixed<D, 0>;

/// Signed integer that saturates on overflow
pub type SaturatingInt<const D: u32> = SaturatingFixed<D, 0>;

/// Signed integer that reports overflow as an error
pub type CheckedInt<const D: u32> =
    Scaled<Spec<D, 0, true, NativeRounding, CheckedOverflow, FixedWidth>>;

// Native-width integers with native policies
pub type I8 = Fixed<7, 0>;
pub type I16 = Fixed<15, 0>;
pub type I32 = Fixed<31, 0>;
pub type I64 = Fixed<63, 0>;
pub type I128 = Fixed<127, 0>;
pub type U8 = UFixed<8, 0>;
pub type U16 = UFixed<16, 0>;
pub type U32 = UFixed<32, 0>;
pub type U64 = UFixed<64, 0>;
pub type U128 = UFixed<128, 0>;
