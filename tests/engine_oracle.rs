//! Wide-integer engine checked against native 128-bit arithmetic.

use fixpoint::wide::WideInt;
use quickcheck::{quickcheck, TestResult};

type Wide128 = WideInt<2>;
type Wide128Small = WideInt<4, true, u32>;
type UWide128 = WideInt<2, false>;

fn wide(value: i128) -> Wide128 {
    Wide128::from_i128(value)
}

#[test]
fn engine_matches_i128_ring() {
    fn prop(a: i128, b: i128) -> bool {
        wide(a).wrapping_add(wide(b)).to_i128() == Some(a.wrapping_add(b))
            && wide(a).wrapping_sub(wide(b)).to_i128() == Some(a.wrapping_sub(b))
            && wide(a).wrapping_mul(wide(b)).to_i128() == Some(a.wrapping_mul(b))
            && wide(a).wrapping_neg().to_i128() == Some(a.wrapping_neg())
    }
    quickcheck(prop as fn(i128, i128) -> bool);
}

#[test]
fn engine_matches_i128_division() {
    fn prop(a: i128, b: i128) -> TestResult {
        if b == 0 {
            return TestResult::from_bool(wide(a).checked_div(wide(b)).is_err());
        }
        let (quotient, remainder) = match wide(a).checked_div_rem(wide(b)) {
            Ok(pair) => pair,
            Err(_) => return TestResult::failed(),
        };
        TestResult::from_bool(
            quotient.to_i128() == Some(a.wrapping_div(b))
                && remainder.to_i128() == Some(a.wrapping_rem(b)),
        )
    }
    quickcheck(prop as fn(i128, i128) -> TestResult);
}

#[test]
fn engine_matches_u128_division() {
    fn prop(a: u128, b: u128) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let (quotient, remainder) = UWide128::from_u128(a).div_rem_unsigned(UWide128::from_u128(b));
        TestResult::from_bool(quotient.to_u128() == Some(a / b) && remainder.to_u128() == Some(a % b))
    }
    quickcheck(prop as fn(u128, u128) -> TestResult);
}

#[test]
fn engine_matches_i128_shifts() {
    fn prop(a: i128, amount: u8) -> bool {
        let amount = u32::from(amount % 128);
        wide(a).wrapping_shl(amount).to_i128() == Some(a.wrapping_shl(amount))
            && wide(a).wrapping_shr(amount).to_i128() == Some(a >> amount)
    }
    quickcheck(prop as fn(i128, u8) -> bool);
}

#[test]
fn engine_matches_i128_ordering_and_text() {
    fn prop(a: i128, b: i128) -> bool {
        wide(a).cmp(&wide(b)) == a.cmp(&b)
            && wide(a).to_string() == a.to_string()
            && wide(a).leading_zeros() == a.leading_zeros()
            && wide(a).count_ones() == a.count_ones()
    }
    quickcheck(prop as fn(i128, i128) -> bool);
}

#[test]
fn word_size_does_not_change_results() {
    fn prop(a: i128, b: i128) -> bool {
        let small = |v: i128| Wide128Small::from_i128(v);
        small(a).wrapping_mul(small(b)).to_i128() == Some(a.wrapping_mul(b))
            && small(a).checked_div(small(b)).ok().and_then(|q| q.to_i128())
                == a.checked_div(b).or_else(|| (b != 0).then(|| a.wrapping_div(b)))
            && small(a).to_string() == a.to_string()
    }
    quickcheck(prop as fn(i128, i128) -> bool);
}
