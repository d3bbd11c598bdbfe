// ============================================================================
// Policy Module
// Rounding, overflow and growth behavior attached to numeric layouts
// ============================================================================
//
// This module provides:
// - Rounding: how precision is discarded (divide, right shift, conversion)
// - Overflow: how out-of-range results are handled (wrap, saturate, checked)
// - Growth: whether arithmetic results widen to stay exact (elastic)
// - Policy: the three above as one value, with the binary-operation rule
//
// Each mode also has a zero-sized tag type so that layouts can carry their
// policy at the type level.

pub mod overflow;
pub mod rounding;

pub use overflow::{
    CheckedOverflow, NativeOverflow, Overflow, OverflowTag, SaturatedOverflow, UndefinedOverflow,
    Unbounded,
};
pub use rounding::{
    Nearest, NativeRounding, NearestAway, NearestEven, Rounding, RoundingTag, TieToPositive,
    TowardNegative, TowardZero,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Growth
// ============================================================================

/// Whether arithmetic results keep the operand width or grow to stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Growth {
    /// Result digits equal the wider operand's digits
    Fixed,
    /// Result digits grow so that no representable input combination
    /// overflows
    Elastic,
}

/// Zero-sized marker selecting a [`Growth`] mode at the type level.
pub trait GrowthTag {
    const MODE: Growth;
}

/// Results keep the operand width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedWidth;

/// Results widen to hold every possible outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Elastic;

impl GrowthTag for FixedWidth {
    const MODE: Growth = Growth::Fixed;
}

impl GrowthTag for Elastic {
    const MODE: Growth = Growth::Elastic;
}

// ============================================================================
// Policy Set
// ============================================================================

/// The behavior attached to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    pub rounding: Rounding,
    pub overflow: Overflow,
    pub growth: Growth,
}

impl Policy {
    /// Native integer behavior: truncating division, wrapping, fixed width.
    pub const NATIVE: Policy = Policy::new(Rounding::Native, Overflow::Wrap, Growth::Fixed);

    pub const fn new(rounding: Rounding, overflow: Overflow, growth: Growth) -> Self {
        Self {
            rounding,
            overflow,
            growth,
        }
    }

    /// Policy of a binary operation's result.
    ///
    /// The stronger overflow policy wins (checked over saturate over wrap
    /// over undefined). Rounding is the left operand's unless that is
    /// native, in which case the right operand's is used. Growth is elastic
    /// if either operand is elastic.
    pub const fn common(self, other: Policy) -> Policy {
        let rounding = match self.rounding {
            Rounding::Native => other.rounding,
            rounding => rounding,
        };
        let growth = match (self.growth, other.growth) {
            (Growth::Fixed, Growth::Fixed) => Growth::Fixed,
            _ => Growth::Elastic,
        };
        Policy::new(rounding, self.overflow.stronger(other.overflow), growth)
    }

    #[inline]
    pub const fn is_elastic(&self) -> bool {
        matches!(self.growth, Growth::Elastic)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::NATIVE
    }
}
