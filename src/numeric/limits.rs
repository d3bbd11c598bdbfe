// ============================================================================
// Numeric Limits
// Range queries shared by native integers, wide integers and scaled values
// ============================================================================

/// Range information for a numeric type, derived purely from its width,
/// signedness and (for scaled values) exponent.
///
/// # Example
/// ```
/// use fixpoint::numeric::Limits;
///
/// assert_eq!(<i8 as Limits>::DIGITS, 7);
/// assert_eq!(<u8 as Limits>::lowest(), 0);
/// assert_eq!(<i16 as Limits>::max_value(), 32767);
/// ```
pub trait Limits: Sized {
    /// Number of value bits, excluding the sign bit
    const DIGITS: u32;

    /// Whether negative values are representable
    const IS_SIGNED: bool;

    /// Largest representable value
    fn max_value() -> Self;

    /// Smallest representable positive value
    fn min_positive() -> Self;

    /// Most negative representable value (zero for unsigned types)
    fn lowest() -> Self;
}

macro_rules! native_limits {
    ($($t:ty),*) => {
        $(
            impl Limits for $t {
                const DIGITS: u32 = <$t>::BITS - (<$t>::MIN != 0) as u32;
                const IS_SIGNED: bool = <$t>::MIN != 0;

                #[inline]
                fn max_value() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn min_positive() -> Self {
                    1
                }

                #[inline]
                fn lowest() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

native_limits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
