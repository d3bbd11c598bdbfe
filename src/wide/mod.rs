// ============================================================================
// Wide Integer Engine
// Arbitrary, statically fixed width integers assembled from machine words
// ============================================================================
//
// This module provides:
// - Word: unsigned storage unit with double-word carry/multiply/divide
// - WideInt<N, SIGNED, W>: N-word two's-complement (or unsigned) integer
//
// Every operation wraps at the type's width (native semantics); rounding and
// overflow policies are applied by the composition layer above.

mod arith;
mod wide_int;
mod word;

pub use wide_int::{DecimalDigits, WideInt};
pub use word::Word;

/// Storage of every composed value: 256-bit signed
pub type Raw = WideInt<4>;

/// Intermediate results of add/subtract/multiply/shift/convert: 512-bit signed
pub type Acc = WideInt<8>;

/// Operands aligned to a common exponent (add/subtract/compare): 832-bit
/// signed, enough for a 256-bit raw value shifted by 512 bits plus a carry
pub type AlignAcc = WideInt<13>;

/// Intermediate results of division, square roots and text parsing:
/// 2048-bit signed
pub type LongAcc = WideInt<32>;
