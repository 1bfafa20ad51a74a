// SPDX-License-Identifier: CC0-1.0

//! Grust umbrella crate.
//!
//! This crate primarily serves as the workspace root and re-exports the
//! container from `primitives/result` so callers can depend on one crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use result::{
    make_err, make_ok, Fallible, Payload, Result, ResultError, UnwrapPolicy, Unwrapped,
};

/// Miscellaneous metadata about the Grust workspace.
pub mod grust_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
