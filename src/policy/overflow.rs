// ============================================================================
// Overflow Policies
// What happens when a result does not fit its destination range
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use crate::wide::{Raw, WideInt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an out-of-range result is brought back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Overflow {
    /// Keep the low bits (modular arithmetic)
    Wrap,
    /// Clamp to the nearest representable extreme
    Saturate,
    /// Report `NumericError::Overflow`
    Checked,
    /// No guarantee is made; this implementation wraps
    Undefined,
}

impl Overflow {
    /// Ordering used when two operands disagree: the stronger policy wins.
    const fn strength(self) -> u8 {
        match self {
            Overflow::Undefined => 0,
            Overflow::Wrap => 1,
            Overflow::Saturate => 2,
            Overflow::Checked => 3,
        }
    }

    /// The policy a binary operation uses when its operands carry `self`
    /// and `other`.
    pub const fn stronger(self, other: Overflow) -> Overflow {
        if other.strength() > self.strength() {
            other
        } else {
            self
        }
    }
}

/// Zero-sized marker selecting an [`Overflow`] mode at the type level.
pub trait OverflowTag {
    const MODE: Overflow;
}

macro_rules! overflow_tag {
    ($(#[$doc:meta])* $name:ident => $mode:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl OverflowTag for $name {
            const MODE: Overflow = Overflow::$mode;
        }
    };
}

overflow_tag!(
    /// Wrap like the native integer types
    NativeOverflow => Wrap
);
overflow_tag!(
    /// Clamp to the representable range
    SaturatedOverflow => Saturate
);
overflow_tag!(
    /// Fail with `NumericError::Overflow`
    CheckedOverflow => Checked
);
overflow_tag!(
    /// Out-of-range results are unspecified
    UndefinedOverflow => Undefined
);

// ============================================================================
// Unbounded Results
// ============================================================================

/// An intermediate result before range handling.
///
/// Normally this is an exact value in an accumulator. When the true result
/// is too large for the accumulator itself it is marked as escaped: only its
/// sign and low bits are known, and it is outside the range of every
/// destination layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unbounded<const N: usize> {
    value: WideInt<N>,
    escaped: bool,
    negative: bool,
}

impl<const N: usize> Unbounded<N> {
    /// A result held exactly.
    #[inline]
    pub fn exact(value: WideInt<N>) -> Self {
        Self {
            value,
            escaped: false,
            negative: value.is_negative(),
        }
    }

    /// A result beyond the accumulator, known by its low bits and sign.
    #[inline]
    pub fn escaped(low_bits: WideInt<N>, negative: bool) -> Self {
        Self {
            value: low_bits,
            escaped: true,
            negative,
        }
    }

    #[inline]
    pub fn value(&self) -> WideInt<N> {
        self.value
    }

    #[inline]
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl Overflow {
    /// Bring `result` into the range of a layout with `digits` value bits
    /// and the given signedness, returning its storage form.
    ///
    /// # Errors
    /// Returns `Overflow` under [`Overflow::Checked`] when the result is out
    /// of range.
    pub fn apply<const N: usize>(
        self,
        result: Unbounded<N>,
        digits: u32,
        signed: bool,
    ) -> NumericResult<Raw> {
        if !result.escaped && result.value.fits(digits, signed) {
            return Ok(result.value.resize());
        }

        tracing::trace!(
            policy = ?self,
            digits,
            signed,
            escaped = result.escaped,
            negative = result.negative,
            "result out of range"
        );

        match self {
            Overflow::Wrap | Overflow::Undefined => Ok(result
                .value
                .truncate_to(digits + signed as u32, signed)
                .resize()),
            Overflow::Saturate => {
                if result.negative {
                    Ok(if signed {
                        !Raw::low_mask(digits)
                    } else {
                        Raw::ZERO
                    })
                } else {
                    Ok(Raw::low_mask(digits))
                }
            },
            Overflow::Checked => Err(NumericError::Overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wide::Acc;

    fn apply(mode: Overflow, value: i128, digits: u32, signed: bool) -> NumericResult<i128> {
        mode.apply(Unbounded::exact(Acc::from(value)), digits, signed)
            .map(|raw| raw.to_i128().unwrap())
    }

    #[test]
    fn test_in_range_passes_through() {
        for mode in [Overflow::Wrap, Overflow::Saturate, Overflow::Checked] {
            assert_eq!(apply(mode, 127, 7, true), Ok(127));
            assert_eq!(apply(mode, -128, 7, true), Ok(-128));
            assert_eq!(apply(mode, 255, 8, false), Ok(255));
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(apply(Overflow::Wrap, 128, 7, true), Ok(-128));
        assert_eq!(apply(Overflow::Wrap, 300, 8, false), Ok(44));
        assert_eq!(apply(Overflow::Wrap, -1, 8, false), Ok(255));
        assert_eq!(apply(Overflow::Undefined, 128, 7, true), Ok(-128));
    }

    #[test]
    fn test_saturate() {
        assert_eq!(apply(Overflow::Saturate, 5_000_000_000, 15, true), Ok(32767));
        assert_eq!(apply(Overflow::Saturate, -5_000_000_000, 15, true), Ok(-32768));
        assert_eq!(apply(Overflow::Saturate, -1, 8, false), Ok(0));
        assert_eq!(apply(Overflow::Saturate, 256, 8, false), Ok(255));
    }

    #[test]
    fn test_checked() {
        assert_eq!(apply(Overflow::Checked, 128, 7, true), Err(NumericError::Overflow));
        assert_eq!(apply(Overflow::Checked, -1, 8, false), Err(NumericError::Overflow));
    }

    #[test]
    fn test_escaped_never_fits() {
        let escaped = Unbounded::escaped(Acc::ZERO, true);
        assert_eq!(
            Overflow::Saturate.apply(escaped, 255, true),
            Ok(!Raw::low_mask(255))
        );
        assert_eq!(
            Overflow::Checked.apply(escaped, 255, true),
            Err(NumericError::Overflow)
        );
        assert_eq!(Overflow::Wrap.apply(escaped, 8, false), Ok(Raw::ZERO));
    }

    #[test]
    fn test_stronger() {
        assert_eq!(Overflow::Wrap.stronger(Overflow::Checked), Overflow::Checked);
        assert_eq!(Overflow::Saturate.stronger(Overflow::Wrap), Overflow::Saturate);
        assert_eq!(Overflow::Undefined.stronger(Overflow::Wrap), Overflow::Wrap);
        assert_eq!(Overflow::Checked.stronger(Overflow::Saturate), Overflow::Checked);
    }
}
