// ============================================================================
// Numeric Module
// Error taxonomy and range queries shared by every numeric layer
// ============================================================================
//
// This module provides:
// - NumericError: DivisionByZero / checked Overflow / parse failures
// - NumericResult: Result alias used by every fallible operation
// - Limits: max / min-positive / lowest queries for any numeric type
//
// Design principles:
// - Failures terminate a single operation; values are never mutated
// - Precision loss is not an error (rounding policies resolve it)

mod errors;
mod limits;

pub use errors::{NumericError, NumericResult};
pub use limits::Limits;
