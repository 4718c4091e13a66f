//! Property tests relating the slice helpers to one another.

use proptest::prelude::*;
use sundry::sequence::{count, every, filter, map, reduce, some};

proptest! {
    #[test]
    fn count_is_filter_len(items in prop::collection::vec(-100i32..100, 0..50)) {
        let even = |x: &i32, _: usize| x % 2 == 0;
        prop_assert_eq!(count(&items, even), filter(&items, even).len());
    }

    #[test]
    fn some_every_via_count(items in prop::collection::vec(-100i32..100, 0..50)) {
        let positive = |x: &i32, _: usize| *x > 0;
        let n = count(&items, positive);
        prop_assert_eq!(some(&items, positive), n > 0);
        prop_assert_eq!(every(&items, positive), n == items.len());
    }

    #[test]
    fn identity_map(items in prop::collection::vec(any::<u8>(), 0..50)) {
        let mapped = map(&items, |x, _| *x);
        prop_assert_eq!(mapped.len(), items.len());
        prop_assert_eq!(mapped, items);
    }

    #[test]
    fn reduce_empty_is_initial(init in any::<i64>()) {
        let empty: Vec<i64> = Vec::new();
        prop_assert_eq!(reduce(&empty, |acc, x| acc.wrapping_mul(*x), init), init);
    }
}
