//! Trimming, filtering, casing, padding, and normalization of strings.
//!
//! This crate provides:
//! - Pattern helpers ([`matches`], [`trim`], [`white_list`], [`replace_pattern`], ...)
//! - Case conversion ([`underscore_to_camel_case`], [`camel_case_to_underscore`])
//! - Layout ([`truncate`], [`pad_left`], [`pad_right`], [`pad_both`])
//! - Normalization ([`safe_file_name`], [`normalize_email`])
//!
//! Caller-supplied patterns that fail to compile never raise: matching
//! reports false and rewriting helpers return the input unchanged.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod email;
pub mod filename;
pub mod layout;
pub mod lines;
pub mod message;
pub mod pattern;

pub use case::{camel_case_to_underscore, reverse, underscore_to_camel_case};
pub use email::{EmailValidator, SyntaxValidator, is_email, normalize_email, normalize_email_with};
pub use filename::safe_file_name;
pub use layout::{pad_both, pad_left, pad_right, truncate};
pub use lines::{get_line, get_lines};
pub use message::truncating_error;
pub use pattern::{
    black_list, contains, escape, left_trim, matches, remove_tags, replace_pattern, right_trim,
    strip_low, trim, white_list,
};
