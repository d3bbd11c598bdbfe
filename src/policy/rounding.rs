// ============================================================================
// Rounding Policies
// Strategies for discarding representable precision
// ============================================================================

use crate::numeric::NumericResult;
use crate::wide::WideInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an operation resolves a result that falls between two representable
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Nearest value; exact halves go to the even neighbour
    NearestEven,
    /// Nearest value; exact halves go away from zero
    NearestAway,
    /// Nearest value; exact halves go toward positive infinity
    TieToPositive,
    /// Truncate toward zero
    TowardZero,
    /// Truncate toward negative infinity (floor)
    TowardNegative,
    /// Whatever the raw integer operation does: division truncates toward
    /// zero, right shifts floor
    Native,
}

/// Zero-sized marker selecting a [`Rounding`] mode at the type level.
pub trait RoundingTag {
    const MODE: Rounding;
}

macro_rules! rounding_tag {
    ($(#[$doc:meta])* $name:ident => $mode:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl RoundingTag for $name {
            const MODE: Rounding = Rounding::$mode;
        }
    };
}

rounding_tag!(
    /// Round to nearest, ties to even
    NearestEven => NearestEven
);
rounding_tag!(
    /// Round to nearest, ties away from zero
    NearestAway => NearestAway
);
rounding_tag!(
    /// Round to nearest, ties toward positive infinity
    TieToPositive => TieToPositive
);
rounding_tag!(
    /// Truncate toward zero
    TowardZero => TowardZero
);
rounding_tag!(
    /// Truncate toward negative infinity
    TowardNegative => TowardNegative
);
rounding_tag!(
    /// Native integer behavior
    NativeRounding => Native
);

/// Round-to-nearest; ties go to even.
pub type Nearest = NearestEven;

impl Rounding {
    /// The mode to use when an exact value is moved to a coarser exponent:
    /// `Native` becomes floor, as an arithmetic right shift does.
    ///
    /// Every literal construction (integers, floats, ratios, decimals, text)
    /// and every conversion between layouts rounds with this mode.
    #[inline]
    pub const fn for_rescale(self) -> Rounding {
        match self {
            Rounding::Native => Rounding::TowardNegative,
            mode => mode,
        }
    }

    /// The mode to use for the quotient of a division: `Native` becomes
    /// truncation toward zero, as integer division does.
    #[inline]
    pub const fn for_division(self) -> Rounding {
        match self {
            Rounding::Native => Rounding::TowardZero,
            mode => mode,
        }
    }

    /// Divide and round the quotient according to this mode.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide<const N: usize>(
        self,
        dividend: WideInt<N>,
        divisor: WideInt<N>,
    ) -> NumericResult<WideInt<N>> {
        let (quotient, remainder) = dividend.checked_div_rem(divisor)?;
        if remainder.is_zero() {
            return Ok(quotient);
        }

        // The remainder carries the dividend's sign, so the exact quotient
        // is negative when it differs from the divisor's sign.
        let negative = remainder.is_negative() != divisor.is_negative();
        let away = if negative {
            quotient.wrapping_sub(WideInt::one())
        } else {
            quotient.wrapping_add(WideInt::one())
        };

        let rounded = match self {
            Rounding::TowardZero | Rounding::Native => quotient,
            Rounding::TowardNegative => {
                if negative {
                    away
                } else {
                    quotient
                }
            },
            Rounding::NearestEven | Rounding::NearestAway | Rounding::TieToPositive => {
                let twice = remainder.unsigned_abs() << 1;
                match twice.cmp(&divisor.unsigned_abs()) {
                    std::cmp::Ordering::Less => quotient,
                    std::cmp::Ordering::Greater => away,
                    std::cmp::Ordering::Equal => self.resolve_tie(quotient, away, negative),
                }
            },
        };
        Ok(rounded)
    }

    /// Divide by `2^amount` and round according to this mode.
    ///
    /// Works from the floor (arithmetic shift) and the discarded low bits;
    /// amounts at or beyond the width behave as if the value were
    /// sign-extended indefinitely.
    pub fn shift_right<const N: usize>(self, value: WideInt<N>, amount: u32) -> WideInt<N> {
        if amount == 0 {
            return value;
        }
        let floor = value >> amount;
        let discarded = value & WideInt::low_mask(amount);
        if discarded.is_zero() {
            return floor;
        }

        let up = floor.wrapping_add(WideInt::one());
        let half_bit = if amount - 1 < WideInt::<N>::BITS {
            !(value & (WideInt::one() << (amount - 1))).is_zero()
        } else {
            value.is_negative()
        };
        let sticky = !(value & WideInt::low_mask(amount - 1)).is_zero();
        let negative = value.is_negative();

        match self {
            Rounding::TowardNegative | Rounding::Native => floor,
            Rounding::TowardZero => {
                if negative {
                    up
                } else {
                    floor
                }
            },
            Rounding::NearestEven | Rounding::NearestAway | Rounding::TieToPositive => {
                match (half_bit, sticky) {
                    (false, _) => floor,
                    (true, true) => up,
                    // Exactly half way between floor and floor + 1
                    (true, false) => {
                        let (toward_zero, away) = if negative { (up, floor) } else { (floor, up) };
                        self.resolve_tie(toward_zero, away, negative)
                    },
                }
            },
        }
    }

    /// Pick between the truncated and the away-from-zero candidate for an
    /// exact half-way result.
    fn resolve_tie<const N: usize>(
        self,
        toward_zero: WideInt<N>,
        away: WideInt<N>,
        negative: bool,
    ) -> WideInt<N> {
        match self {
            Rounding::NearestAway => away,
            Rounding::TieToPositive => {
                if negative {
                    toward_zero
                } else {
                    away
                }
            },
            _ => {
                if toward_zero.low_word() & 1 == 0 {
                    toward_zero
                } else {
                    away
                }
            },
        }
    }
}
