//! Display and JSON rendering.

use serde::Serialize;
use sundry::convert::{to_json, to_string};
use sundry::foundation::Value;

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn display_rendering() {
    assert_eq!(to_string(&-3), "-3");
    assert_eq!(to_string("text"), "text");
    assert_eq!(to_string(&Value::from(true)), "true");
}

#[test]
fn json_rendering() {
    assert_eq!(to_json(&Point { x: 1, y: -2 }).unwrap(), r#"{"x":1,"y":-2}"#);
    assert_eq!(to_json(&vec!["a", "b"]).unwrap(), r#"["a","b"]"#);
    assert_eq!(to_json("quote\"d").unwrap(), r#""quote\"d""#);
}

#[test]
fn json_rejects_non_finite_floats() {
    assert!(to_json(&f64::NAN).is_err());
    assert!(to_json(&f64::INFINITY).is_err());
    assert_eq!(to_json(&vec![1.0, f64::NAN]).unwrap_or_default(), "");
}

#[test]
fn json_rejects_non_string_keys() {
    let mut map = std::collections::HashMap::new();
    map.insert(vec![1u8], 1);
    assert!(to_json(&map).is_err());
}
