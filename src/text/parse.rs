// ============================================================================
// Decimal Parsing
// Exact decimal text to a scaled value through the quantize step
// ============================================================================

use crate::compose::{quantize_ratio, Layout};
use crate::numeric::{NumericError, NumericResult};
use crate::policy::Unbounded;
use crate::scaled::Scaled;
use crate::wide::LongAcc;
use std::str::FromStr;

/// Integer parts longer than this (after leading zeros) exceed every layout:
/// the largest representable magnitude, 2^511, has 154 decimal digits.
const MAX_INTEGER_DIGITS: usize = 160;

/// Syntactic pieces of a decimal literal.
struct Literal<'a> {
    negative: bool,
    integer: &'a [u8],
    fraction: &'a [u8],
}

impl<'a> Literal<'a> {
    /// Split `[+-]digits[.digits]`, surrounded by optional ASCII whitespace.
    fn split(text: &'a str) -> Option<Self> {
        let body = text.trim_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
        let (negative, body) = match body.first() {
            Some(b'-') => (true, &body[1..]),
            Some(b'+') => (false, &body[1..]),
            _ => (false, body),
        };
        let (integer, fraction) = match body.iter().position(|&b| b == b'.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, &body[body.len()..]),
        };
        let all_digits = |part: &[u8]| part.iter().all(u8::is_ascii_digit);
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }
        Some(Self {
            negative,
            integer,
            fraction,
        })
    }
}

#[inline]
fn push_digit(value: LongAcc, digit: u8) -> LongAcc {
    value
        .wrapping_mul(LongAcc::from(10u8))
        .wrapping_add(LongAcc::from(digit - b'0'))
}

impl<L: Layout> FromStr for Scaled<L> {
    type Err = NumericError;

    /// Parse decimal text, rounding once with the layout's rounding policy
    /// and range-checking with its overflow policy.
    ///
    /// Fraction digits past the last one that can influence rounding are
    /// folded into a single sticky digit.
    fn from_str(text: &str) -> NumericResult<Self> {
        let literal = match Literal::split(text) {
            Some(literal) => literal,
            None => {
                tracing::debug!(input = text, "rejected numeric text");
                return Err(NumericError::InvalidInput);
            },
        };

        let first_significant = literal
            .integer
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(literal.integer.len());
        let integer = &literal.integer[first_significant..];

        let mut numerator = integer.iter().fold(LongAcc::ZERO, |acc, &b| push_digit(acc, b));

        if integer.len() > MAX_INTEGER_DIGITS {
            // Only the low bits of the integer part are known
            let signed = if literal.negative {
                numerator.wrapping_neg()
            } else {
                numerator
            };
            let low_bits = if L::EXPONENT <= 0 {
                signed << L::EXPONENT.unsigned_abs()
            } else {
                L::POLICY
                    .rounding
                    .for_rescale()
                    .shift_right(signed, L::EXPONENT as u32)
            };
            let escaped = Unbounded::escaped(low_bits, literal.negative);
            return L::POLICY
                .overflow
                .apply(escaped, L::DIGITS, L::SIGNED)
                .map(Scaled::from_bits);
        }

        // Halfway points between representable values have at most
        // fraction_bits + 1 decimal places
        let fraction_bits = if L::EXPONENT < 0 {
            L::EXPONENT.unsigned_abs() as usize
        } else {
            0
        };
        let kept = literal.fraction.len().min(fraction_bits + 1);
        let (significant, rest) = literal.fraction.split_at(kept);

        let mut denominator = LongAcc::one();
        for &b in significant {
            numerator = push_digit(numerator, b);
            denominator = denominator.wrapping_mul(LongAcc::from(10u8));
        }
        if rest.iter().any(|&b| b != b'0') {
            numerator = push_digit(numerator, b'1');
            denominator = denominator.wrapping_mul(LongAcc::from(10u8));
        }
        if literal.negative {
            numerator = numerator.wrapping_neg();
        }

        quantize_ratio::<L, 32>(numerator, denominator, 0).map(Scaled::from_bits)
    }
}
