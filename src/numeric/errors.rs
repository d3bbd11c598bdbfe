// ============================================================================
// Numeric Errors
// Error types for wide-integer and fixed-point operations
// ============================================================================

use std::fmt;

/// Errors that can terminate a single arithmetic, conversion or text operation.
///
/// Precision loss is never an error: it is resolved by the rounding policy.
/// Out-of-range results only surface as `Overflow` under the checked policy;
/// wrapping and saturating policies resolve them locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the destination and the overflow policy is checked
    Overflow,
    /// Division or remainder by zero
    DivisionByZero,
    /// Input string or value is invalid (malformed text, NaN, infinity)
    InvalidInput,
    /// Output buffer cannot hold the sign and integer digits
    BufferTooSmall,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result does not fit the destination")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::BufferTooSmall => {
                write!(f, "buffer too small: integer digits do not fit")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
