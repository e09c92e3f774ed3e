//! Unified error types for galleria.
//!
//! Both variants signal misuse of the API contract rather than recoverable
//! runtime conditions. They propagate immediately to the caller and are
//! never retried or suppressed internally.

use thiserror::Error;

/// All galleria errors.
///
/// This is the canonical error type for all galleria operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mandatory field failed validation at construction time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not supported by the receiver, e.g. mutating the
    /// read-only view of gallery membership.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result type for galleria operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is an unsupported-operation error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }
}
