//! Error types for TOON encoding and decoding.
//!
//! The two codec directions fail independently:
//!
//! - [`ToonEncodeError`]: the value tree contains something the format
//!   cannot represent (non-finite numbers under strict mode).
//! - [`ToonDecodeError`]: the document is malformed. Every parse-level
//!   variant carries a 1-based line number; [`ToonDecodeError::line`]
//!   exposes it uniformly.
//!
//! Errors abort the current operation and unwind to the public entry point;
//! no partial output is ever exposed.
//!
//! ```rust
//! use toon_codec::{decode, DecodeOptions};
//!
//! let err = decode("xs[3]: 1,2", &DecodeOptions::default()).unwrap_err();
//! assert_eq!(err.line(), Some(1));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while encoding a value tree to TOON text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToonEncodeError {
    /// A `NaN` or infinite number was encountered in strict mode.
    #[error("cannot encode non-finite number `{0}`")]
    NonFiniteNumber(f64),

    /// Catch-all used by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl serde::ser::Error for ToonEncodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ToonEncodeError::Message(msg.to_string())
    }
}

/// Errors raised while decoding TOON text into a value tree.
///
/// Line numbers are 1-based and point at the offending source line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToonDecodeError {
    /// A backslash not followed by one of `n`, `r`, `t`, `"`, `\`.
    #[error("line {line}: invalid escape sequence `\\{found}`")]
    InvalidEscape { line: usize, found: char },

    /// An opening `"` with no matching closing `"` on the same token.
    #[error("line {line}: unterminated string")]
    UnterminatedString { line: usize },

    /// A bracket header that matches none of the three array shapes.
    #[error("line {line}: invalid array header: {message}")]
    InvalidArrayHeader { line: usize, message: String },

    /// Declared element or field count differs from what was observed.
    #[error("line {line}: expected {expected} but found {found}")]
    CountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A content line whose key is not followed by `:` or a bracket header.
    #[error("line {line}: expected ':' after key")]
    MissingColon { line: usize },

    /// Tabs in indentation, or an indent width off the configured grid
    /// (strict mode).
    #[error("line {line}: bad indentation: {message}")]
    BadIndentation { line: usize, message: String },

    /// A blank line between array elements or tabular rows (strict mode).
    #[error("line {line}: blank line inside array")]
    BlankLineInArray { line: usize },

    /// Content past the declared element count at array indentation.
    #[error("line {line}: content after the declared element count")]
    ExtraRows { line: usize },

    /// The same key appeared twice in one object (strict mode).
    #[error("line {line}: duplicate key `{key}`")]
    DuplicateKey { line: usize, key: String },

    /// Expanding a dotted key collided with an incompatible existing value
    /// (strict mode).
    #[error("line {line}: path expansion conflict at `{path}`")]
    PathExpansionConflict { line: usize, path: String },

    /// Several bare primitive lines at the document root (strict mode).
    #[error("line {line}: multiple primitive values at document root")]
    MultiplePrimitives { line: usize },

    /// Catch-all used by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl ToonDecodeError {
    /// The 1-based source line the error points at, when one is known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ToonDecodeError::InvalidEscape { line, .. }
            | ToonDecodeError::UnterminatedString { line }
            | ToonDecodeError::InvalidArrayHeader { line, .. }
            | ToonDecodeError::CountMismatch { line, .. }
            | ToonDecodeError::MissingColon { line }
            | ToonDecodeError::BadIndentation { line, .. }
            | ToonDecodeError::BlankLineInArray { line }
            | ToonDecodeError::ExtraRows { line }
            | ToonDecodeError::DuplicateKey { line, .. }
            | ToonDecodeError::PathExpansionConflict { line, .. }
            | ToonDecodeError::MultiplePrimitives { line } => Some(*line),
            ToonDecodeError::Message(_) => None,
        }
    }

    /// Attaches a line number to a line-agnostic lexical error.
    pub(crate) fn from_lex(err: LexError, line: usize) -> Self {
        match err {
            LexError::InvalidEscape(found) => ToonDecodeError::InvalidEscape { line, found },
            LexError::UnterminatedString => ToonDecodeError::UnterminatedString { line },
        }
    }
}

impl serde::de::Error for ToonDecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ToonDecodeError::Message(msg.to_string())
    }
}

/// Lexical-layer failures. The lexical helpers don't know which source line
/// they are working on; the decoder attaches it via
/// [`ToonDecodeError::from_lex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexError {
    InvalidEscape(char),
    UnterminatedString,
}
