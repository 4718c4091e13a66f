//! Sign, range, and wholeness predicates over any numeric type.
//!
//! All helpers are generic over [`Number`], so the same call works for `u8`,
//! `i64`, `f32` or `f64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use sundry_convert::to_int;
use sundry_foundation::{Number, Value};

// =============================================================================
// Sign
// =============================================================================

/// Absolute value.
///
/// A signed integer minimum has no positive counterpart and saturates to the
/// type's maximum, so `abs(i32::MIN) == i32::MAX`.
pub fn abs<T: Number>(value: T) -> T {
    if value >= T::zero() {
        value
    } else if value == T::min_value() {
        T::max_value()
    } else {
        T::zero() - value
    }
}

/// Signum as a float: `1.0`, `-1.0`, or `0.0` (also for NaN).
pub fn sign<T: Number>(value: T) -> f64 {
    if value > T::zero() {
        1.0
    } else if value < T::zero() {
        -1.0
    } else {
        0.0
    }
}

/// True if `value < 0`.
pub fn is_negative<T: Number>(value: T) -> bool {
    value < T::zero()
}

/// True if `value > 0`.
pub fn is_positive<T: Number>(value: T) -> bool {
    value > T::zero()
}

/// True if `value >= 0`.
pub fn is_non_negative<T: Number>(value: T) -> bool {
    value >= T::zero()
}

/// True if `value <= 0`.
pub fn is_non_positive<T: Number>(value: T) -> bool {
    value <= T::zero()
}

// =============================================================================
// Ranges
// =============================================================================

/// True if `value` lies in the inclusive interval bounded by `left` and `right`.
///
/// The bounds may be given in either order. Works for any ordered type,
/// strings included.
pub fn in_range<T: PartialOrd + ?Sized>(value: &T, left: &T, right: &T) -> bool {
    let (low, high) = if left > right {
        (right, left)
    } else {
        (left, right)
    };
    value >= low && value <= high
}

/// Integer range check over loosely typed inputs.
///
/// Each input goes through [`to_int`]; anything that fails to convert is
/// treated as zero.
pub fn in_range_int(
    value: impl Into<Value>,
    left: impl Into<Value>,
    right: impl Into<Value>,
) -> bool {
    let value = to_int(value).unwrap_or_default();
    let left = to_int(left).unwrap_or_default();
    let right = to_int(right).unwrap_or_default();
    in_range(&value, &left, &right)
}

// =============================================================================
// Wholeness
// =============================================================================

/// True if `value` has no fractional part. NaN and infinities are not whole.
pub fn is_whole<T: Number>(value: T) -> bool {
    value % T::one() == T::zero()
}

/// True if `value` is whole and strictly positive. Zero is not natural.
pub fn is_natural<T: Number>(value: T) -> bool {
    is_whole(value) && is_positive(value)
}
