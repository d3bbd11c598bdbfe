// ============================================================================
// Layouts
// Type-level description of a composed numeric type
// ============================================================================

use crate::policy::{
    FixedWidth, GrowthTag, NativeOverflow, NativeRounding, OverflowTag, Policy, RoundingTag,
};
use std::marker::PhantomData;

/// Largest supported digit count (the raw storage is 256-bit signed)
pub const MAX_DIGITS: u32 = 255;

/// Smallest supported exponent
pub const MIN_EXPONENT: i32 = -256;

/// Largest supported exponent
pub const MAX_EXPONENT: i32 = 256;

/// Width, signedness, scale and policy of a composed numeric type.
///
/// A layout is a zero-sized type whose associated constants fully describe
/// how its values are stored and how they behave. Values of the layout
/// represent `raw * 2^EXPONENT`, where `raw` is an integer with `DIGITS`
/// value bits (plus a sign bit when `SIGNED`).
///
/// Result layouts of arithmetic (see [`Sum`](super::Sum),
/// [`Product`](super::Product), ...) are layouts too, computed from the
/// operand layouts by the compiler.
pub trait Layout {
    /// Value bits, excluding the sign bit
    const DIGITS: u32;
    /// Whether negative values are representable
    const SIGNED: bool;
    /// Power of two scaling the raw integer
    const EXPONENT: i32;
    /// Rounding, overflow and growth behavior
    const POLICY: Policy;

    /// Compile-time range check; referencing it from generic code rejects
    /// unsupported layouts when they are instantiated.
    const VALID: () = assert!(
        Self::DIGITS >= 1
            && Self::DIGITS <= MAX_DIGITS
            && Self::EXPONENT >= MIN_EXPONENT
            && Self::EXPONENT <= MAX_EXPONENT,
        "layout digits must be in 1..=255 and exponent in -256..=256"
    );
}

/// A user-specified layout.
///
/// # Example
/// ```
/// use fixpoint::compose::{Layout, Spec};
/// use fixpoint::policy::{NearestEven, SaturatedOverflow, Rounding, Overflow};
///
/// // 15 value bits plus sign, 8 of them fractional
/// type Q7_8 = Spec<15, -8, true, NearestEven, SaturatedOverflow>;
/// assert_eq!(Q7_8::DIGITS, 15);
/// assert_eq!(Q7_8::EXPONENT, -8);
/// assert_eq!(Q7_8::POLICY.rounding, Rounding::NearestEven);
/// assert_eq!(Q7_8::POLICY.overflow, Overflow::Saturate);
/// ```
pub struct Spec<
    const DIGITS: u32,
    const EXPONENT: i32 = 0,
    const SIGNED: bool = true,
    R = NativeRounding,
    O = NativeOverflow,
    G = FixedWidth,
>(PhantomData<fn() -> (R, O, G)>);

impl<const D: u32, const E: i32, const S: bool, R, O, G> Layout for Spec<D, E, S, R, O, G>
where
    R: RoundingTag,
    O: OverflowTag,
    G: GrowthTag,
{
    const DIGITS: u32 = D;
    const SIGNED: bool = S;
    const EXPONENT: i32 = E;
    const POLICY: Policy = Policy::new(R::MODE, O::MODE, G::MODE);
}

/// The same layout with a different exponent.
pub struct Rescaled<L, const E: i32>(PhantomData<fn() -> L>);

impl<L: Layout, const E: i32> Layout for Rescaled<L, E> {
    const DIGITS: u32 = L::DIGITS;
    const SIGNED: bool = L::SIGNED;
    const EXPONENT: i32 = E;
    const POLICY: Policy = L::POLICY;
}
