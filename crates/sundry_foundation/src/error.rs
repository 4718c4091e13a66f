//! Error types for sundry operations.
//!
//! Uses `thiserror` for ergonomic error definition. Every fallible helper in
//! the workspace returns [`Result`], so callers can match on [`ErrorKind`]
//! regardless of which layer raised it.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for sundry operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(
        input: impl Into<String>,
        target: &'static str,
        reason: ConversionReason,
    ) -> Self {
        Self::new(ErrorKind::Conversion {
            input: input.into(),
            target,
            reason,
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a format error for input that fails a validity precondition.
    #[must_use]
    pub fn format(input: impl Into<String>, expected: &'static str) -> Self {
        Self::new(ErrorKind::Format {
            input: input.into(),
            expected,
        })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an error carrying a caller-formatted message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message(message.into()))
    }

    /// Returns true if this is a conversion error.
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self.kind, ErrorKind::Conversion { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A numeric or boolean parse failed.
    #[error("cannot convert {input:?} to {target}: {reason}")]
    Conversion {
        /// Textual rendering of the rejected input.
        input: String,
        /// Name of the requested target type.
        target: &'static str,
        /// Why the conversion was rejected.
        reason: ConversionReason,
    },

    /// A value could not be rendered to the target serialized format.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Input failed a required validity precondition.
    #[error("{input:?} is not {expected}")]
    Format {
        /// The rejected input.
        input: String,
        /// Description of what was expected (e.g. "an email").
        expected: &'static str,
    },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// Free-form message built by the caller.
    #[error("{0}")]
    Message(String),
}

/// Why a conversion was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionReason {
    /// The text is neither an integer nor a float.
    Malformed,
    /// The value does not fit in the target type.
    OutOfRange,
    /// The input kind cannot be converted at all.
    Unsupported(&'static str),
}

impl fmt::Display for ConversionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "invalid format"),
            Self::OutOfRange => write!(f, "out of range"),
            Self::Unsupported(kind) => write!(f, "unsupported input kind {kind}"),
        }
    }
}
