//! Error types for TOON encoding and decoding.
//!
//! All failures share one flat taxonomy:
//!
//! - [`Error::Encoding`]: structural failure while serializing a value
//! - [`Error::Decoding`]: malformed TOON syntax (only raised for conditions
//!   the active parser mode has no recovery strategy for)
//! - [`Error::Validation`]: a resource limit was exceeded (`max_depth`,
//!   `max_size_mb`); raised identically in strict and permissive modes
//!
//! ## Examples
//!
//! ```rust
//! use toonkit::{decode, Error};
//!
//! let result = decode("a: 1\n    b: 2");
//! assert!(matches!(result, Err(Error::Decoding { line: 2, .. })));
//! ```

use thiserror::Error;

/// All errors produced by the TOON codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Structural failure during value serialization.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Malformed TOON syntax, with the 1-based line number of the offending
    /// line in the (whitespace-trimmed) input.
    #[error("decoding error at line {line}: {msg}")]
    Decoding { line: usize, msg: String },

    /// A configured resource limit was exceeded.
    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates an encoding error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Error::Encoding(msg.into())
    }

    /// Creates a decoding error pointing at a 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonkit::Error;
    ///
    /// let err = Error::decoding(3, "unexpected indentation");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn decoding(line: usize, msg: impl Into<String>) -> Self {
        Error::Decoding {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a validation (resource limit) error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Returns the line number for decoding errors, `None` otherwise.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Decoding { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
