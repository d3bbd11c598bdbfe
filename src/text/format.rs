// ============================================================================
// Decimal Formatting
// Exact decimal text from the raw integer and exponent, no floating point
// ============================================================================

use super::options::FormatOptions;
use crate::compose::Layout;
use crate::numeric::{NumericError, NumericResult};
use crate::scaled::Scaled;
use crate::wide::WideInt;
use std::fmt;

/// Unsigned accumulator: shifted magnitudes reach bit 511
type Magnitude = WideInt<8, false>;

/// Upper bound of [`capacity`] over every supported layout
pub const MAX_CHARS: usize = 260;

/// Characters needed to format any value with the given digits, exponent
/// and signedness.
///
/// Worst case: every fractional bit yields one decimal digit, and the
/// integer bits yield `floor(bits * log10(2)) + 1` digits.
///
/// # Example
/// ```
/// use fixpoint::text::capacity;
///
/// assert_eq!(capacity(7, -3, true), 7); // "-15.875"
/// assert_eq!(capacity(8, 2, false), 4); // "1020"
/// ```
pub const fn capacity(digits: u32, exponent: i32, signed: bool) -> usize {
    let fraction_bits = if exponent < 0 { exponent.unsigned_abs() } else { 0 };
    let scale_bits = if exponent > 0 { exponent as u32 } else { 0 };
    let integer_bits = digits.saturating_sub(fraction_bits) + scale_bits;
    let sign_chars = signed as usize;
    let integer_chars = (integer_bits as usize * 30103) / 100000 + 1;
    let radix_chars = (fraction_bits > 0) as usize;
    sign_chars + integer_chars + radix_chars + fraction_bits as usize
}

/// Cursor over a caller-provided output buffer.
struct Output<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> Output<'a> {
    #[inline]
    fn push(&mut self, byte: u8) -> NumericResult<()> {
        let slot = self.buf.get_mut(self.len).ok_or(NumericError::BufferTooSmall)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    #[inline]
    fn room(&self) -> usize {
        self.buf.len() - self.len
    }
}

impl<L: Layout> Scaled<L> {
    /// Characters needed to format any value of this layout
    pub const MAX_CHARS: usize = capacity(L::DIGITS, L::EXPONENT, L::SIGNED);

    /// Write the shortest exact decimal text into `buf`, returning the
    /// number of bytes written.
    ///
    /// # Errors
    /// Returns `BufferTooSmall` if the sign and integer digits do not fit;
    /// fractional digits that do not fit are truncated instead.
    pub fn to_chars(&self, buf: &mut [u8]) -> NumericResult<usize> {
        self.to_chars_with(buf, &FormatOptions::default())
    }

    /// Write decimal text according to `options`.
    ///
    /// # Errors
    /// Returns `BufferTooSmall` if the sign and integer digits do not fit.
    pub fn to_chars_with(&self, buf: &mut [u8], options: &FormatOptions) -> NumericResult<usize> {
        let magnitude: Magnitude = self.raw().unsigned_abs().resize();
        let (integer, mut fraction, fraction_bits) = if L::EXPONENT >= 0 {
            (magnitude << L::EXPONENT as u32, Magnitude::ZERO, 0)
        } else {
            let bits = L::EXPONENT.unsigned_abs();
            (magnitude >> bits, magnitude & Magnitude::low_mask(bits), bits)
        };

        let mut out = Output { buf, len: 0 };
        if self.is_negative() {
            out.push(b'-')?;
        } else if options.force_sign {
            out.push(b'+')?;
        }
        let sign_len = out.len;

        let skip_integer = integer.is_zero() && !fraction.is_zero() && !options.leading_zero;
        if !skip_integer {
            for digit in integer.decimal_digits() {
                out.push(b'0' + digit)?;
            }
        }

        let limit = if fraction.is_zero() {
            0
        } else {
            let room = out.room().saturating_sub(1);
            options.max_fraction_digits.map_or(room, |max| max.min(room))
        };
        if limit > 0 {
            let radix = out.len;
            out.push(b'.')?;
            let ten = Magnitude::from(10u8);
            let mask = Magnitude::low_mask(fraction_bits);
            let mut emitted = 0;
            while !fraction.is_zero() && emitted < limit {
                fraction = fraction.wrapping_mul(ten);
                let digit = (fraction >> fraction_bits).low_word() as u8;
                fraction = fraction & mask;
                out.push(b'0' + digit)?;
                emitted += 1;
            }
            // Truncated output keeps no trailing zeros and no bare radix
            while out.len > radix + 1 && out.buf[out.len - 1] == b'0' {
                out.len -= 1;
            }
            if out.len == radix + 1 {
                out.len = radix;
            }
        }

        if out.len == sign_len {
            out.push(b'0')?;
        }
        Ok(out.len)
    }
}

impl<L: Layout> fmt::Display for Scaled<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_CHARS];
        let len = self.to_chars(&mut buf).map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Spec;
    use crate::numeric::Limits;
    use crate::scaled::{Fixed, UFixed, I16};

    type Q3 = Fixed<7, -3>;

    fn text<L: Layout>(value: Scaled<L>) -> String {
        value.to_string()
    }

    #[test]
    fn test_capacity_examples() {
        assert_eq!(capacity(8, 2, false), 4);
        assert_eq!(capacity(7, -3, true), 7);
        assert_eq!(capacity(16, 0, false), 5);
        assert_eq!(capacity(63, -32, true), 44);
        assert_eq!(Q3::MAX_CHARS, 7);
    }

    #[test]
    fn test_capacity_bound() {
        assert!(capacity(255, -256, true) <= MAX_CHARS);
        assert!(capacity(255, 256, true) <= MAX_CHARS);
        assert!(capacity(255, -255, true) <= MAX_CHARS);
        assert!(capacity(255, -1, true) <= MAX_CHARS);
    }

    #[test]
    fn test_capacity_is_sufficient() {
        assert_eq!(text(Q3::lowest()), "-16");
        assert_eq!(text(Q3::from_raw(-127).unwrap()).len(), Q3::MAX_CHARS);
        assert_eq!(text(UFixed::<8, 2>::max_value()), "1020");
        assert_eq!(text(UFixed::<16, 0>::max_value()), "65535");
        let x = Fixed::<63, -32>::lowest() + Fixed::<63, -32>::min_positive();
        assert!(text(x).len() <= Fixed::<63, -32>::MAX_CHARS);
    }

    #[test]
    fn test_exact_text() {
        assert_eq!(text(Q3::from_f64(-15.875).unwrap()), "-15.875");
        assert_eq!(text(Q3::from_f64(0.125).unwrap()), "0.125");
        assert_eq!(text(Q3::from_f64(-0.5).unwrap()), "-0.5");
        assert_eq!(text(Q3::from_int(3).unwrap()), "3");
        assert_eq!(text(Q3::zero()), "0");
        assert_eq!(text(I16::from_int(-32768).unwrap()), "-32768");
    }

    #[test]
    fn test_positive_exponent() {
        type Coarse = Scaled<Spec<7, 4>>;
        assert_eq!(text(Coarse::from_raw(-3).unwrap()), "-48");
    }

    #[test]
    fn test_buffer_too_small() {
        let x = Q3::from_f64(-15.875).unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(x.to_chars(&mut buf), Err(NumericError::BufferTooSmall));
    }

    #[test]
    fn test_fraction_truncates_to_fit() {
        let x = Q3::from_f64(-15.875).unwrap();
        let mut buf = [0u8; 5];
        let len = x.to_chars(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"-15.8");

        let mut buf = [0u8; 4];
        let len = x.to_chars(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"-15");
    }

    #[test]
    fn test_options() {
        let x = Q3::from_f64(0.625).unwrap();
        let mut buf = [0u8; 16];

        let options = FormatOptions::new().with_max_fraction_digits(1);
        let len = x.to_chars_with(&mut buf, &options).unwrap();
        assert_eq!(&buf[..len], b"0.6");

        let options = FormatOptions::new().with_force_sign(true).with_leading_zero(false);
        let len = x.to_chars_with(&mut buf, &options).unwrap();
        assert_eq!(&buf[..len], b"+.625");

        let options = FormatOptions::new().with_max_fraction_digits(0);
        let len = x.to_chars_with(&mut buf, &options).unwrap();
        assert_eq!(&buf[..len], b"0");
    }

    #[test]
    fn test_truncation_drops_trailing_zeros() {
        // 1.03125 truncated to two digits is "1.03"; to one digit "1"
        let x = Fixed::<15, -5>::from_f64(1.03125).unwrap();
        let mut buf = [0u8; 16];
        let len = x
            .to_chars_with(&mut buf, &FormatOptions::new().with_max_fraction_digits(1))
            .unwrap();
        assert_eq!(&buf[..len], b"1");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>8}", Q3::from_f64(1.5).unwrap()), "     1.5");
    }
}
