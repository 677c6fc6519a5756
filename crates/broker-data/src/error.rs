//! Error types for value conversion and interop.
//!
//! Comparison, hashing and copying of [`crate::Data`] are total and never
//! produce one of these. Errors only arise at the edges: extracting a
//! native payload of the wrong kind, parsing a tag name, or bridging to and
//! from JSON.

use thiserror::Error;

use crate::tag::Tag;

/// Errors that can occur when converting into or out of [`crate::Data`].
#[derive(Error, Debug)]
pub enum DataError {
    /// A native payload was requested from a value of a different kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Tag, found: Tag },

    /// A string did not name one of the nine kinds.
    #[error("unknown tag: {0:?}")]
    UnknownTag(String),

    /// NaN and infinities have no JSON representation.
    #[error("real value {0} is not finite")]
    NonFiniteReal(f64),

    /// JSON `null` has no counterpart among the nine kinds.
    #[error("null is not a representable value")]
    NullValue,

    /// Nesting exceeded what the JSON bridge converts.
    #[error("nesting deeper than {0} levels")]
    DepthLimit(usize),

    /// The input string was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout broker-data.
pub type Result<T> = std::result::Result<T, DataError>;
