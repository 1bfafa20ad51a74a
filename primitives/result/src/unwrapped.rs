//! Outcome of [`crate::Result::unwrap`].

/// The value handed back by `unwrap`.
///
/// Success and failure payloads have different types, so `unwrap` cannot
/// return either one bare. A failure only shows up here when its policy is
/// [`crate::UnwrapPolicy::Return`]; under `Panic` the call never returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unwrapped<T, E> {
    /// The success payload.
    Value(T),
    /// The failure payload, returned as an ordinary value.
    Failure(E),
}

impl<T, E> Unwrapped<T, E> {
    /// Returns true for a success payload.
    pub fn is_value(&self) -> bool { matches!(self, Unwrapped::Value(_)) }

    /// Returns true for a failure payload.
    pub fn is_failure(&self) -> bool { matches!(self, Unwrapped::Failure(_)) }

    /// The success payload, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Unwrapped::Value(value) => Some(value),
            Unwrapped::Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Unwrapped::Value(_) => None,
            Unwrapped::Failure(err) => Some(err),
        }
    }
}
