//! Best-effort conversion between strings, numbers, booleans, and JSON.
//!
//! Numeric conversion dispatches on the [`Value`] kind of the input:
//! integers and floats are cast (checked) into the target type, strings are
//! parsed as an integer when they look like one and as a float otherwise.
//! Failures surface as [`ErrorKind::Conversion`](sundry_foundation::ErrorKind);
//! callers wanting a zero fallback use `unwrap_or_default()`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt::Display;

use num_traits::{NumCast, ToPrimitive};
use serde::Serialize;
use sundry_foundation::{ConversionReason, Error, Number, Result, Value};
use tracing::trace;

mod finite;

/// Renders `value` with its `Display` implementation.
///
/// The output is meant for humans and is not guaranteed to parse back.
pub fn to_string<T: Display + ?Sized>(value: &T) -> String {
    format!("{value}")
}

/// Serializes `value` to compact JSON text.
///
/// # Errors
///
/// Returns a serialization error when the value cannot be represented in
/// JSON, e.g. a map whose keys are not strings or a NaN/infinite float.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    finite::check(value)
        .and_then(|()| serde_json::to_string(value))
        .map_err(|e| {
            trace!(error = %e, "serialization failed");
            Error::serialization(e.to_string())
        })
}

/// Converts a number or numeric string to the numeric type `U`.
///
/// # Errors
///
/// Returns a conversion error when a string is neither an integer nor a
/// float, when the value does not fit in `U`, or when the input is `Nil` or
/// `Bool`.
pub fn to_number<U: Number>(value: impl Into<Value>) -> Result<U> {
    let value = value.into();
    let converted = match &value {
        Value::Int(n) => cast(*n, true),
        Value::Uint(n) => cast(*n, true),
        Value::Float(n) => cast(*n, n.is_finite()),
        Value::String(s) => return parse_number(s),
        Value::Nil | Value::Bool(_) => {
            return Err(failure(
                &value,
                U::type_name(),
                ConversionReason::Unsupported(value.kind_name()),
            ));
        }
    };
    converted.ok_or_else(|| failure(&value, U::type_name(), ConversionReason::OutOfRange))
}

/// [`to_number`] with a 64-bit signed integer target.
///
/// # Errors
///
/// See [`to_number`].
pub fn to_int(value: impl Into<Value>) -> Result<i64> {
    to_number::<i64>(value)
}

/// Parses one of the canonical boolean spellings:
/// `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// # Errors
///
/// Returns a conversion error for any other text.
pub fn to_boolean(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(failure(s, "bool", ConversionReason::Malformed)),
    }
}

/// True if `s` is an optionally signed decimal integer without leading zeros.
pub fn is_int(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    match digits.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn parse_number<U: Number>(s: &str) -> Result<U> {
    let target = U::type_name();
    if is_int(s) {
        let n: i64 = s
            .parse()
            .map_err(|_| failure(s, target, ConversionReason::OutOfRange))?;
        return cast(n, true).ok_or_else(|| failure(s, target, ConversionReason::OutOfRange));
    }
    let n: f64 = s
        .parse()
        .map_err(|_| failure(s, target, ConversionReason::Malformed))?;
    cast(n, n.is_finite()).ok_or_else(|| failure(s, target, ConversionReason::OutOfRange))
}

/// Checked cast into `U`. A finite source that lands on an infinite float
/// (e.g. `1e300` into `f32`) counts as out of range.
fn cast<U: Number>(n: impl ToPrimitive, finite_source: bool) -> Option<U> {
    let converted = <U as NumCast>::from(n)?;
    let overflowed =
        finite_source && !<f64 as NumCast>::from(converted).is_some_and(f64::is_finite);
    (!overflowed).then_some(converted)
}

fn failure(
    input: &(impl Display + ?Sized),
    target: &'static str,
    reason: ConversionReason,
) -> Error {
    trace!(%input, target_type = target, %reason, "conversion failed");
    Error::conversion(input.to_string(), target, reason)
}
