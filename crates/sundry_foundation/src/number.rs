//! Numeric capability bound.

use num_traits::{Bounded, Num, NumCast};

/// Any built-in integer or floating-point type.
///
/// Blanket-implemented, so `u8`, `i64`, `f32`, `f64` and friends all qualify
/// without further work.
pub trait Number: Num + NumCast + Bounded + PartialOrd + Copy {
    /// Short name of the type, used in error messages.
    #[must_use]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T> Number for T where T: Num + NumCast + Bounded + PartialOrd + Copy {}
