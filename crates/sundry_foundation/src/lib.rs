//! Core types shared by every sundry layer.
//!
//! This crate provides:
//! - [`Error`] - Error type with a categorized [`ErrorKind`]
//! - [`Value`] - Sum type over the input kinds accepted by conversions
//! - [`Number`] - Bound satisfied by every built-in integer and float

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod number;
pub mod value;

pub use error::{ConversionReason, Error, ErrorKind, Result};
pub use number::Number;
pub use value::Value;
