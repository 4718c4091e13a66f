//! Property tests for the text helpers.

use proptest::prelude::*;
use sundry::text::{
    camel_case_to_underscore, pad_both, pad_left, pad_right, reverse, safe_file_name, trim,
    underscore_to_camel_case,
};

proptest! {
    #[test]
    fn trim_is_idempotent(s in "[ a-z\t]{0,24}") {
        let once = trim(&s, "");
        prop_assert_eq!(trim(&once, ""), once.clone());
        let set_once = trim(&s, "a-c ");
        prop_assert_eq!(trim(&set_once, "a-c "), set_once.clone());
    }

    #[test]
    fn padded_length_is_max(s in "\\PC{0,12}", pad in "\\PC{1,3}", n in 0usize..30) {
        let expected = n.max(s.chars().count());
        prop_assert_eq!(pad_left(&s, &pad, n).chars().count(), expected);
        prop_assert_eq!(pad_right(&s, &pad, n).chars().count(), expected);
        prop_assert_eq!(pad_both(&s, &pad, n).chars().count(), expected);
    }

    #[test]
    fn snake_case_round_trips(s in "[a-z]{1,6}(_[a-z]{1,6}){0,4}") {
        prop_assert_eq!(camel_case_to_underscore(&underscore_to_camel_case(&s)), s);
    }

    #[test]
    fn reverse_twice_is_identity(s in "\\PC{0,32}") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn safe_names_have_no_separators(s in "\\PC{0,40}") {
        let name = safe_file_name(&s);
        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains("--"));
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.'));
    }
}
