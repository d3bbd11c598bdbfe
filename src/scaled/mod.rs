// ============================================================================
// Scaled Module
// Fixed-point values: a raw integer, a compile-time exponent and policies
// ============================================================================
//
// This module provides:
// - Scaled<L>: value of layout L, construction from integers, floats,
//   rationals and decimals, exact exits to f64 / i128 / Decimal
// - Arithmetic, shift and comparison operators with deduced result layouts
// - Aliases for common layouts (Fixed, ElasticInt, SaturatingInt, I16, ...)
//
// Design principles:
// - Operands are aligned to a common exponent before combining
// - Values are immutable; every operation returns a new value

mod aliases;
mod ops;
mod value;

pub use aliases::{
    CheckedInt, ElasticFixed, ElasticInt, Fixed, RoundingFixed, SaturatingFixed, SaturatingInt,
    UFixed, I128, I16, I32, I64, I8, U128, U16, U32, U64, U8,
};
pub use value::Scaled;
