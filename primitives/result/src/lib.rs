#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `grust-result` — Success/Failure Container
//!
//! This crate defines [`Result`], a value that holds either a success payload
//! or a failure payload, together with combinators that branch on which one
//! it holds. Fallible computations are expressed as values and chained
//! fluently instead of being thrown.
//!
//! ## Core Concepts
//!
//! ### Short-circuiting
//! [`Result::map`] and [`Result::and_then`] only run their closure on a
//! success. A failure passes through untouched, with its payload and
//! [`UnwrapPolicy`] preserved.
//!
//! ### Unwrap policy
//! Every failure carries an [`UnwrapPolicy`]. Under `Panic`, [`Result::unwrap`]
//! raises a panic whose payload is the failure value itself; under `Return`,
//! the failure comes back as [`Unwrapped::Failure`].
//!
//! ### Deferred payloads
//! [`Result::success_with`] and [`Result::failure_with`] take a producer
//! closure instead of a value. The producer runs only when the payload is
//! consumed, and never runs if the combinators short-circuit past it.
//!
//! ## Example
//! ```
//! use result::{make_err, make_ok, Unwrapped};
//!
//! let doubled = make_ok::<i32, String>(5).map(|x| x * 2).unwrap();
//! assert_eq!(doubled, Unwrapped::Value(10));
//!
//! assert_eq!(make_err::<i32, _>("boom", false).or_else(0), 0);
//!
//! let chained = make_ok::<i32, &str>(5).and_then(|_| make_err::<i32, _>("fail", false));
//! assert!(chained.is_err());
//! ```

use std::fmt;

/// Errors raised by the container's own operations.
pub mod error;
/// Eager and deferred payload storage.
pub mod payload;
/// The typed form of the panic-on-unwrap flag.
pub mod policy;
/// The value returned by `unwrap`.
pub mod unwrapped;

pub use error::{Fallible, ResultError};
pub use payload::Payload;
pub use policy::UnwrapPolicy;
pub use unwrapped::Unwrapped;

enum Inner<T, E> {
    Ok(Payload<T>),
    Err(Payload<E>, UnwrapPolicy),
}

/// Either a success payload of type `T` or a failure payload of type `E`.
///
/// Exactly one of [`is_ok`](Result::is_ok) and [`is_err`](Result::is_err)
/// holds for the lifetime of the value. Combinators consume the receiver
/// and build a new result.
#[must_use = "this `Result` may be a failure, which should be handled"]
pub struct Result<T, E> {
    inner: Inner<T, E>,
}

/// Builds a success result holding `value`.
pub fn make_ok<T, E>(value: T) -> Result<T, E> { Result::success(value) }

/// Builds a failure result holding `value`; `panic` selects whether `unwrap`
/// aborts on it.
pub fn make_err<T, E>(value: E, panic: bool) -> Result<T, E> { Result::failure(value, panic) }

impl<T, E> Result<T, E> {
    /// Builds a success result from a value.
    pub fn success(value: T) -> Self { Self { inner: Inner::Ok(Payload::Ready(value)) } }

    /// Builds a success result whose payload is produced on first use.
    ///
    /// The producer must be `Sync` even though it runs at most once: a
    /// `Result` holding it stays `Sync`, so it can be shared by reference
    /// across threads.
    pub fn success_with<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + Send + Sync + 'static,
    {
        Self { inner: Inner::Ok(Payload::deferred(producer)) }
    }

    /// Builds a failure result from a value.
    ///
    /// `policy` accepts an [`UnwrapPolicy`] or the plain `bool` panic flag.
    pub fn failure(value: E, policy: impl Into<UnwrapPolicy>) -> Self {
        Self { inner: Inner::Err(Payload::Ready(value), policy.into()) }
    }

    /// Builds a failure result whose payload is produced on first use.
    ///
    /// Same bounds as [`success_with`](Result::success_with).
    pub fn failure_with<F>(producer: F, policy: impl Into<UnwrapPolicy>) -> Self
    where
        F: FnOnce() -> E + Send + Sync + 'static,
    {
        Self { inner: Inner::Err(Payload::deferred(producer), policy.into()) }
    }

    /// Returns true if this is a success.
    pub fn is_ok(&self) -> bool { matches!(self.inner, Inner::Ok(_)) }

    /// Returns true if this is a failure.
    pub fn is_err(&self) -> bool { matches!(self.inner, Inner::Err(..)) }

    /// The unwrap policy of a failure; `None` for a success.
    pub fn policy(&self) -> Option<UnwrapPolicy> {
        match self.inner {
            Inner::Ok(_) => None,
            Inner::Err(_, policy) => Some(policy),
        }
    }

    /// Returns true if `unwrap` would panic on this result.
    pub fn panics_on_unwrap(&self) -> bool { self.policy().is_some_and(|p| p.panics()) }

    /// Chains a computation that may itself fail.
    ///
    /// A failure is returned unchanged and `f` is never called. On success,
    /// the result of `f` is returned as is.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.inner {
            Inner::Ok(value) => f(value.get()),
            Inner::Err(err, policy) => short_circuit("and_then", err, policy),
        }
    }

    /// Transforms the success payload, leaving a failure unchanged.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.inner {
            Inner::Ok(value) => Result::success(f(value.get())),
            Inner::Err(err, policy) => short_circuit("map", err, policy),
        }
    }

    /// Returns the success payload, or `default` on failure.
    ///
    /// Unlike `std::result::Result::or_else`, this takes a value, not a closure.
    pub fn or_else(self, default: T) -> T { self.unwrap_or(default) }

    /// Returns the success payload, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self.inner {
            Inner::Ok(value) => value.get(),
            Inner::Err(..) => default,
        }
    }

    /// Extracts the payload.
    ///
    /// # Panics
    ///
    /// Panics on a failure whose policy is [`UnwrapPolicy::Panic`]. The panic
    /// payload is the failure value, recoverable with `catch_unwind` and
    /// `downcast::<E>()`.
    ///
    /// The `E: Send + 'static` bound is needed for the panic payload and
    /// applies under either policy. For a failure type such as `Rc<str>` or a
    /// borrowed `&'a str`, use [`into_std`](Result::into_std) or
    /// [`try_unwrap_err`](Result::try_unwrap_err) instead.
    #[track_caller]
    pub fn unwrap(self) -> Unwrapped<T, E>
    where
        E: Send + 'static,
    {
        match self.inner {
            Inner::Ok(value) => Unwrapped::Value(value.get()),
            Inner::Err(err, UnwrapPolicy::Return) => Unwrapped::Failure(err.get()),
            Inner::Err(err, UnwrapPolicy::Panic) => {
                tracing::error!("unwrap called on a failure result with panic policy");
                std::panic::panic_any(err.get())
            }
        }
    }

    /// Extracts the failure payload, whatever the policy.
    ///
    /// # Panics
    ///
    /// Panics with [`ResultError::UnwrapErrOnSuccess`] if this is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(err) => err,
            Err(e) => panic!("{}", e),
        }
    }

    /// Extracts the failure payload, or reports that there is none.
    pub fn try_unwrap_err(self) -> Fallible<E> {
        match self.inner {
            Inner::Ok(_) => Err(ResultError::UnwrapErrOnSuccess),
            Inner::Err(err, _) => Ok(err.get()),
        }
    }

    /// The success payload, if any.
    pub fn ok(self) -> Option<T> {
        match self.inner {
            Inner::Ok(value) => Some(value.get()),
            Inner::Err(..) => None,
        }
    }

    /// The failure payload, if any.
    pub fn err(self) -> Option<E> { self.try_unwrap_err().ok() }

    /// Runs any deferred producer now, keeping the variant and policy.
    pub fn force(self) -> Self {
        let inner = match self.inner {
            Inner::Ok(value) => Inner::Ok(value.force()),
            Inner::Err(err, policy) => Inner::Err(err.force(), policy),
        };
        Self { inner }
    }

    /// Converts into the standard library result, dropping the policy.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self.inner {
            Inner::Ok(value) => Ok(value.get()),
            Inner::Err(err, _) => Err(err.get()),
        }
    }
}

fn short_circuit<U, E>(op: &'static str, err: Payload<E>, policy: UnwrapPolicy) -> Result<U, E> {
    tracing::trace!(op, %policy, "short-circuiting on failure");
    Result { inner: Inner::Err(err, policy) }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(value) => Result::success(value),
            Err(err) => Result::failure(err, UnwrapPolicy::default()),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Inner::Err(err, policy) => {
                f.debug_struct("Err").field("payload", err).field("policy", policy).finish()
            }
        }
    }
}
