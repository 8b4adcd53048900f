//! Error type shared by the dynamic-programming routines.

use thiserror::Error;

/// Errors raised when an input cannot be solved as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input violates a precondition (mismatched lengths, negative
    /// quantities, empty sequence).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An intermediate quantity does not fit the integer width in use.
    #[error("overflow: {0}")]
    Overflow(String),
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] from a message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Builds an [`Error::Overflow`] from a message.
    pub fn overflow(msg: impl Into<String>) -> Self {
        Error::Overflow(msg.into())
    }
}

/// Result type for dynamic-programming operations
pub type Result<T> = std::result::Result<T, Error>;
