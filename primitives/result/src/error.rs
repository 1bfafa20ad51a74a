//! Errors reported by the container itself.
//!
//! Failure payloads carried by a [`crate::Result`] are opaque to this crate;
//! the variants here only describe misuse of the container.

use thiserror::Error;

/// Result alias for operations that report a [`ResultError`].
pub type Fallible<T> = std::result::Result<T, ResultError>;

/// Errors raised by the container's own operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    /// `unwrap_err` was asked for a failure payload on a success result.
    #[error("called `unwrap_err` on a success result")]
    UnwrapErrOnSuccess,
    /// The text did not name a known unwrap policy.
    #[error("Invalid unwrap policy: {0}")]
    InvalidPolicy(String),
}
