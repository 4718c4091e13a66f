//! Numeric and boolean conversion through the facade.

use proptest::prelude::*;
use sundry::convert::{is_int, to_boolean, to_int, to_number};
use sundry::foundation::{ConversionReason, ErrorKind, Value};

#[test]
fn integer_strings_parse() {
    assert_eq!(to_number::<i64>("42").unwrap(), 42);
    assert_eq!(to_number::<i64>("-17").unwrap(), -17);
    assert_eq!(to_int("+8").unwrap(), 8);
}

#[test]
fn float_strings_parse() {
    let n = to_number::<f64>("2.5").unwrap();
    assert!((n - 2.5).abs() < f64::EPSILON);
}

#[test]
fn malformed_string_is_conversion_error() {
    let err = to_number::<f64>("abc").unwrap_err();
    assert!(err.is_conversion());
    match err.kind {
        ErrorKind::Conversion { input, reason, .. } => {
            assert_eq!(input, "abc");
            assert_eq!(reason, ConversionReason::Malformed);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn zero_fallback_via_default() {
    assert_eq!(to_number::<f64>("abc").unwrap_or_default(), 0.0);
    assert_eq!(to_int("").unwrap_or_default(), 0);
}

#[test]
fn overflowing_integer_string_is_out_of_range() {
    let err = to_int("99999999999999999999").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Conversion {
            reason: ConversionReason::OutOfRange,
            ..
        }
    ));
}

#[test]
fn narrowing_casts_are_checked() {
    assert_eq!(to_number::<u8>(200i64).unwrap(), 200);
    assert!(to_number::<u8>(300i64).is_err());
    assert!(to_number::<u32>(-1).is_err());
}

#[test]
fn float_narrowing_is_checked() {
    assert!(to_number::<f32>(1e300).is_err());
    assert!(to_number::<f32>("1e300").is_err());
    assert!(to_number::<f32>("0.5").is_ok());
}

#[test]
fn nil_and_bool_are_unsupported() {
    assert!(to_int(Value::Nil).is_err());
    assert!(to_int(true).is_err());
}

#[test]
fn boolean_spellings() {
    for s in ["1", "t", "T", "TRUE", "true", "True"] {
        assert!(to_boolean(s).unwrap(), "{s}");
    }
    for s in ["0", "f", "F", "FALSE", "false", "False"] {
        assert!(!to_boolean(s).unwrap(), "{s}");
    }
    for s in ["yes", "tRuE", "", " true"] {
        assert!(to_boolean(s).is_err(), "{s}");
    }
}

#[test]
fn integer_shape() {
    assert!(is_int("0"));
    assert!(is_int("-12"));
    assert!(!is_int("012"));
    assert!(!is_int("1.0"));
    assert!(!is_int("-"));
}

proptest! {
    #[test]
    fn rendered_integers_parse_back(n in any::<i64>()) {
        prop_assert_eq!(to_int(n.to_string()).unwrap(), n);
    }
}
