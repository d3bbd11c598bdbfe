// ============================================================================
// Text Module
// Exact decimal formatting and parsing of scaled values
// ============================================================================
//
// This module provides:
// - to_chars / to_chars_with: shortest exact decimal text into a caller
//   buffer, with a compile-time capacity bound per layout
// - FormatOptions: fraction digit limit, forced sign, leading zero
// - FromStr: decimal text to a value, rounding once under the layout policy
// - Serde support (feature "serde"): values as decimal strings
//
// Formatting never goes through floating point and never allocates.

mod format;
mod options;
mod parse;
#[cfg(feature = "serde")]
mod serialize;

pub use format::{capacity, MAX_CHARS};
pub use options::{FormatOptions, MAX_FRACTION_DIGITS};
