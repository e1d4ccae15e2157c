//! Error types for the Best Fit simulator.
//!
//! Provides a unified error type covering the two failure categories of the
//! simulator boundary: malformed text input and rejected degenerate values.
//! The allocator core itself is total over well-formed input and never
//! produces an error.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::{Error, Result};
//!
//! fn require_positive(value: i64) -> Result<u64> {
//!     if value <= 0 {
//!         return Err(Error::validation("sizes must be positive"));
//!     }
//!     Ok(value as u64)
//! }
//! ```

use std::fmt;

/// Main error type for the simulator.
///
/// All variants originate at the input boundary; a parse or validation
/// failure means the allocator was never invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A text field could not be interpreted as a list of integers.
    Parse(String),

    /// Input parsed but violated a value constraint (e.g. non-positive size).
    Validation(String),

    /// Internal invariant violation. Not expected in practice.
    Internal(String),
}

impl Error {
    /// Create a parse error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestfit_sim::Error;
    ///
    /// let err = Error::parse("token 2 is not an integer");
    /// assert!(matches!(err, Error::Parse(_)));
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if the error was caused by user-supplied input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestfit_sim::Error;
    ///
    /// assert!(Error::parse("bad token").is_input_error());
    /// assert!(!Error::internal("broken invariant").is_input_error());
    /// ```
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Validation(_))
    }

    /// Get error code for logging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestfit_sim::Error;
    ///
    /// assert_eq!(Error::parse("x").code(), "PARSE");
    /// ```
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias using the simulator's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
