// ============================================================================
// Format Options
// Run-time configuration for decimal text output
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most fractional digits any layout can produce (one per fractional bit)
pub const MAX_FRACTION_DIGITS: usize = 256;

/// Controls how [`Scaled::to_chars_with`](crate::scaled::Scaled::to_chars_with)
/// renders a value.
///
/// The default reproduces the shortest exact text: every significant
/// fractional digit, a leading `0` for values in (-1, 1), and a sign only
/// for negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Upper bound on emitted fractional digits; excess digits are
    /// truncated. `None` emits every significant digit that fits.
    pub max_fraction_digits: Option<usize>,

    /// Emit `+` before non-negative values
    pub force_sign: bool,

    /// Emit `0` before the radix point for values in (-1, 1)
    pub leading_zero: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_fraction_digits: None,
            force_sign: false,
            leading_zero: true,
        }
    }
}

impl FormatOptions {
    /// Create the default (shortest exact) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: limit the number of fractional digits
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    /// Builder: always emit a sign
    pub fn with_force_sign(mut self, force: bool) -> Self {
        self.force_sign = force;
        self
    }

    /// Builder: emit or omit the leading `0` of values in (-1, 1)
    pub fn with_leading_zero(mut self, leading_zero: bool) -> Self {
        self.leading_zero = leading_zero;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), String> {
        if let Some(digits) = self.max_fraction_digits {
            if digits > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "Fraction digit limit cannot exceed {}",
                    MAX_FRACTION_DIGITS
                ));
            }
            // ".5" with no fraction digits left would print nothing
            if digits == 0 && !self.leading_zero {
                return Err("Leading zero is required when no fraction digits are emitted"
                    .to_string());
            }
        }

        Ok(())
    }
}
