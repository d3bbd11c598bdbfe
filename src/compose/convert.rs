// ============================================================================
// Conversion Pipeline
// Rescale, round, then range-check into a destination layout
// ============================================================================
//
// Every value that enters a layout passes through one of the functions
// here. The order is fixed: the exact intermediate is rescaled to the
// destination exponent, rounded with the destination's rounding policy when
// precision is discarded, and finally handed to the destination's overflow
// policy.
//
// Native rounding floors everywhere except in `quantize_quotient`, where it
// truncates toward zero like integer division.

use super::layout::Layout;
use crate::numeric::{NumericError, NumericResult};
use crate::policy::{Rounding, Unbounded};
use crate::wide::{Raw, WideInt};

/// Move the exact value `value * 2^exponent` into layout `D`.
///
/// # Errors
/// Returns `Overflow` when `D` uses checked overflow and the value is out
/// of range.
pub fn settle<D: Layout, const N: usize>(value: WideInt<N>, exponent: i32) -> NumericResult<Raw> {
    let shift = exponent as i64 - D::EXPONENT as i64;
    let unbounded = if shift > 0 {
        let (shifted, lost) = value.overflowing_shl(shift.min(u32::MAX as i64) as u32);
        if lost {
            Unbounded::escaped(shifted, value.is_negative())
        } else {
            Unbounded::exact(shifted)
        }
    } else if shift < 0 {
        let amount = shift.unsigned_abs().min(u32::MAX as u64) as u32;
        Unbounded::exact(D::POLICY.rounding.for_rescale().shift_right(value, amount))
    } else {
        Unbounded::exact(value)
    };
    D::POLICY.overflow.apply(unbounded, D::DIGITS, D::SIGNED)
}

/// Move the exact rational `numerator / denominator * 2^exponent` into
/// layout `D`, rounding once.
///
/// This is the literal quantization step: it rounds exactly as [`settle`]
/// would for the same value.
///
/// # Errors
/// Returns `DivisionByZero` for a zero denominator, or `Overflow` when `D`
/// uses checked overflow and the value is out of range.
pub fn quantize_ratio<D: Layout, const N: usize>(
    numerator: WideInt<N>,
    denominator: WideInt<N>,
    exponent: i32,
) -> NumericResult<Raw> {
    let rounding = D::POLICY.rounding.for_rescale();
    quantize::<D, N>(rounding, numerator, denominator, exponent)
}

/// Move the quotient `numerator / denominator * 2^exponent` of a division
/// into layout `D`, rounding once. Native rounding truncates toward zero.
///
/// # Errors
/// Returns `DivisionByZero` for a zero denominator, or `Overflow` when `D`
/// uses checked overflow and the value is out of range.
pub fn quantize_quotient<D: Layout, const N: usize>(
    numerator: WideInt<N>,
    denominator: WideInt<N>,
    exponent: i32,
) -> NumericResult<Raw> {
    let rounding = D::POLICY.rounding.for_division();
    quantize::<D, N>(rounding, numerator, denominator, exponent)
}

fn quantize<D: Layout, const N: usize>(
    rounding: Rounding,
    numerator: WideInt<N>,
    denominator: WideInt<N>,
    exponent: i32,
) -> NumericResult<Raw> {
    if denominator.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let negative = !numerator.is_zero() && (numerator.is_negative() != denominator.is_negative());
    let shift = exponent as i64 - D::EXPONENT as i64;

    let unbounded = if shift >= 0 {
        let (scaled, lost) = numerator.overflowing_shl(shift.min(u32::MAX as i64) as u32);
        if lost {
            Unbounded::escaped(scaled, negative)
        } else {
            Unbounded::exact(rounding.divide(scaled, denominator)?)
        }
    } else {
        let amount = shift.unsigned_abs().min(u32::MAX as u64) as u32;
        let (scaled, lost) = denominator.overflowing_shl(amount);
        if lost {
            Unbounded::exact(divide_scaled_down(
                rounding,
                numerator,
                denominator,
                amount,
                negative,
            ))
        } else {
            Unbounded::exact(rounding.divide(numerator, scaled)?)
        }
    };
    D::POLICY.overflow.apply(unbounded, D::DIGITS, D::SIGNED)
}

/// `numerator / (denominator * 2^amount)` when the scaled denominator does
/// not fit the accumulator.
///
/// The magnitude quotient is formed with as many extra bits as the
/// numerator leaves free, the remainder is folded into a sticky bit, and the
/// result is rounded by a single right shift. The numerator must leave at
/// least two bits free.
fn divide_scaled_down<const N: usize>(
    rounding: Rounding,
    numerator: WideInt<N>,
    denominator: WideInt<N>,
    amount: u32,
    negative: bool,
) -> WideInt<N> {
    let magnitude = numerator.unsigned_abs();
    let spare = magnitude.leading_zeros();
    debug_assert!(spare >= 2);
    let extra = spare.saturating_sub(2);

    let (quotient, remainder) = (magnitude << extra).div_rem_unsigned(denominator.unsigned_abs());
    let sticky = if remainder.is_zero() {
        WideInt::ZERO
    } else {
        WideInt::one()
    };
    let bits: WideInt<N> = ((quotient << 1) | sticky).reinterpret();
    let signed = if negative { bits.wrapping_neg() } else { bits };
    rounding.shift_right(signed, amount.saturating_add(extra + 1))
}
