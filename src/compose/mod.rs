// ============================================================================
// Composition Module
// Result-type deduction and the single conversion pipeline
// ============================================================================
//
// This module provides:
// - Layout: digits / signedness / exponent / policy of a composed type
// - Spec: user layouts assembled from const parameters and policy tags
// - Sum, Difference, Product, Quotient, Shifted, Negated: deduced layouts
// - settle / quantize_ratio / quantize_quotient: rescale -> round ->
//   overflow into a layout
//
// Design principles:
// - Every result layout is a compile-time function of operand layouts
// - Rounding happens at most once, and always before range handling

mod convert;
mod deduce;
mod layout;

pub use convert::{quantize_quotient, quantize_ratio, settle};
pub use deduce::{Difference, Negated, Product, Quotient, Shifted, Sum};
pub use layout::{Layout, Rescaled, Spec, MAX_DIGITS, MAX_EXPONENT, MIN_EXPONENT};
