// ============================================================================
// Result Layout Deduction
// Layouts of arithmetic results as pure functions of the operand layouts
// ============================================================================
//
// Elastic results grow to the minimum width that cannot lose information:
//   add / subtract  -> max(aligned digits) + 1
//   multiply        -> sum of digits
//   divide          -> dividend digits
//   shift left by N -> digits + N
// Fixed-width results keep the widest operand's digit count and rely on the
// overflow policy when the true result does not fit.
//
// Deduced digit counts never exceed the storage width; beyond that the
// overflow policy applies even to elastic results.

use super::layout::{Layout, MAX_DIGITS};
use crate::policy::Policy;
use std::marker::PhantomData;

const fn max_u32(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}

const fn min_i32(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

const fn clamp_digits(digits: u32) -> u32 {
    if digits > MAX_DIGITS {
        MAX_DIGITS
    } else {
        digits
    }
}

/// Digits needed to hold a value after moving it to a finer exponent.
const fn aligned(digits: u32, exponent: i32, common: i32) -> u32 {
    digits + (exponent - common) as u32
}

const fn common_digits<A: Layout, B: Layout>() -> u32 {
    let common = min_i32(A::EXPONENT, B::EXPONENT);
    let widest = max_u32(
        aligned(A::DIGITS, A::EXPONENT, common),
        aligned(B::DIGITS, B::EXPONENT, common),
    );
    if A::POLICY.common(B::POLICY).is_elastic() {
        clamp_digits(widest + 1)
    } else {
        clamp_digits(widest)
    }
}

// ============================================================================
// Binary Operations
// ============================================================================

/// Layout of `A + B`.
pub struct Sum<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Layout, B: Layout> Layout for Sum<A, B> {
    const DIGITS: u32 = common_digits::<A, B>();
    const SIGNED: bool = A::SIGNED || B::SIGNED;
    const EXPONENT: i32 = min_i32(A::EXPONENT, B::EXPONENT);
    const POLICY: Policy = A::POLICY.common(B::POLICY);
}

/// Layout of `A - B`. Elastic differences are always signed.
pub struct Difference<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Layout, B: Layout> Layout for Difference<A, B> {
    const DIGITS: u32 = common_digits::<A, B>();
    const SIGNED: bool = A::SIGNED || B::SIGNED || Self::POLICY.is_elastic();
    const EXPONENT: i32 = min_i32(A::EXPONENT, B::EXPONENT);
    const POLICY: Policy = A::POLICY.common(B::POLICY);
}

/// Layout of `A * B`.
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Layout, B: Layout> Layout for Product<A, B> {
    const DIGITS: u32 = if Self::POLICY.is_elastic() {
        clamp_digits(A::DIGITS + B::DIGITS)
    } else {
        max_u32(A::DIGITS, B::DIGITS)
    };
    const SIGNED: bool = A::SIGNED || B::SIGNED;
    const EXPONENT: i32 = A::EXPONENT + B::EXPONENT;
    const POLICY: Policy = A::POLICY.common(B::POLICY);
}

/// Layout of `A / B`: the quotient keeps the dividend's digits.
pub struct Quotient<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Layout, B: Layout> Layout for Quotient<A, B> {
    const DIGITS: u32 = A::DIGITS;
    const SIGNED: bool = A::SIGNED || B::SIGNED;
    const EXPONENT: i32 = A::EXPONENT - B::EXPONENT;
    const POLICY: Policy = A::POLICY.common(B::POLICY);
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Layout of `A` shifted left by the constant `N`.
pub struct Shifted<A, const N: u32>(PhantomData<fn() -> A>);

impl<A: Layout, const N: u32> Layout for Shifted<A, N> {
    const DIGITS: u32 = if A::POLICY.is_elastic() {
        clamp_digits(A::DIGITS + N)
    } else {
        A::DIGITS
    };
    const SIGNED: bool = A::SIGNED;
    const EXPONENT: i32 = A::EXPONENT;
    const POLICY: Policy = A::POLICY;
}

/// Layout of `-A`.
pub struct Negated<A>(PhantomData<fn() -> A>);

impl<A: Layout> Layout for Negated<A> {
    const DIGITS: u32 = if A::POLICY.is_elastic() {
        clamp_digits(A::DIGITS + A::SIGNED as u32)
    } else {
        A::DIGITS
    };
    const SIGNED: bool = true;
    const EXPONENT: i32 = A::EXPONENT;
    const POLICY: Policy = A::POLICY;
}
