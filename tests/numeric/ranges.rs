//! Inclusive range checks.

use proptest::prelude::*;
use sundry::numeric::{in_range, in_range_int};

#[test]
fn bounds_are_inclusive() {
    assert!(in_range(&5, &5, &10));
    assert!(in_range(&10, &5, &10));
    assert!(!in_range(&11, &5, &10));
}

#[test]
fn bound_order_does_not_matter() {
    assert!(in_range(&7, &10, &5));
    assert!(in_range(&0.5, &1.0, &0.0));
}

#[test]
fn strings_compare_lexically() {
    assert!(in_range("b", "a", "c"));
    assert!(!in_range("d", "c", "a"));
}

#[test]
fn loose_integer_inputs() {
    assert!(in_range_int("5", 1, "10"));
    assert!(in_range_int(3u8, "-2", 4.0));
    assert!(!in_range_int("11", 1, 10));
}

#[test]
fn unconvertible_inputs_count_as_zero() {
    assert!(in_range_int("abc", -1, 1));
    assert!(!in_range_int("abc", 1, 5));
}

proptest! {
    #[test]
    fn swapping_bounds_is_symmetric(v in -1000i64..1000, a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(in_range(&v, &a, &b), in_range(&v, &b, &a));
    }

    #[test]
    fn endpoints_always_inside(a in any::<i32>(), b in any::<i32>()) {
        prop_assert!(in_range(&a, &a, &b));
        prop_assert!(in_range(&b, &a, &b));
    }
}
