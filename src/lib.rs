//! Sundry - pure helper functions for everyday data wrangling
//!
//! This crate re-exports all layers of the sundry workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: sundry_text        — Trimming, filtering, casing, padding, normalization
//!          sundry_numeric     — Sign, range, and wholeness predicates
//! Layer 1: sundry_convert     — String/number/boolean/JSON conversion
//!          sundry_sequence    — Index-aware slice helpers
//! Layer 0: sundry_foundation  — Core types (Error, Value, Number)
//! ```

pub use sundry_convert as convert;
pub use sundry_foundation as foundation;
pub use sundry_numeric as numeric;
pub use sundry_sequence as sequence;
pub use sundry_text as text;

pub use sundry_foundation::{Error, ErrorKind, Result};
