//! Error types for JSON encoding and decoding operations.

use std::fmt;
use thiserror::Error;

/// The category of a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The current character does not match an expected delimiter or the
    /// next letter of `true`/`false`/`null`.
    UnexpectedCharacter,
    /// A numeric literal is malformed or overflows to a non-finite value.
    BadNumber,
    /// An unterminated string literal or an invalid escape sequence.
    BadString,
    /// An object literal repeats a key.
    DuplicateKey,
    /// Non-whitespace input remains after the top-level value.
    TrailingContent,
    /// Containers are nested deeper than the configured limit.
    DepthExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnexpectedCharacter => "unexpected character",
            ErrorKind::BadNumber => "bad number",
            ErrorKind::BadString => "bad string",
            ErrorKind::DuplicateKey => "duplicate key",
            ErrorKind::TrailingContent => "trailing content",
            ErrorKind::DepthExceeded => "depth exceeded",
        };
        f.write_str(name)
    }
}

/// A terminal decoding failure.
///
/// `position` is the byte offset into the source of the offending character,
/// or the source length when the input ended early. `found` is the offending
/// character itself, `None` at end of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {position}: {message}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: usize,
    pub found: Option<char>,
}

impl SyntaxError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        position: usize,
        found: Option<char>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            found,
        }
    }
}

/// Errors from the depth-limited encoder. Plain [`encode`](crate::encode) cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value nests containers deeper than `EncodeOptions::max_depth`.
    #[error("maximum nesting depth of {limit} exceeded while encoding")]
    DepthExceeded { limit: usize },
}

/// Convenience alias used throughout jsonkit-core.
pub type Result<T> = std::result::Result<T, SyntaxError>;
