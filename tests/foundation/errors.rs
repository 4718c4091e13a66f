//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use sundry::foundation::{ConversionReason, Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_conversion() {
    let err = Error::conversion("abc", "f64", ConversionReason::Malformed);
    assert!(matches!(err.kind, ErrorKind::Conversion { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("abc"));
    assert!(msg.contains("f64"));
}

#[test]
fn error_serialization() {
    let err = Error::serialization("key must be a string");
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    assert!(format!("{err}").contains("key must be a string"));
}

#[test]
fn error_format() {
    let err = Error::format("nope", "an email");
    assert!(matches!(err.kind, ErrorKind::Format { .. }));
    assert!(format!("{err}").contains("nope"));
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(10, 3);
    let msg = format!("{err}");
    assert!(msg.contains("10"));
    assert!(msg.contains("3"));
}

// =============================================================================
// Error Traits
// =============================================================================

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::message("boxed"));
}

#[test]
fn error_equality() {
    assert_eq!(Error::message("a"), Error::message("a"));
    assert_ne!(
        Error::index_out_of_bounds(1, 0),
        Error::index_out_of_bounds(2, 0)
    );
}
