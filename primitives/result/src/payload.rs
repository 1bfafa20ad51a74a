//! Payload storage for both sides of a result.
//!
//! A payload is either stored eagerly or produced on demand by a
//! zero-argument closure. Deferred producers run at most once, when a
//! consuming operation first needs the value.

use std::fmt;

/// Boxed zero-argument producer of a payload.
///
/// `Sync` keeps a deferred [`crate::Result`] shareable across threads.
pub type Producer<V> = Box<dyn FnOnce() -> V + Send + Sync>;

/// A success or failure payload.
pub enum Payload<V> {
    /// Value computed at construction.
    Ready(V),
    /// Value computed when first consumed.
    Deferred(Producer<V>),
}

impl<V> Payload<V> {
    /// Wraps `producer` so that it runs only when the payload is consumed.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: FnOnce() -> V + Send + Sync + 'static,
    {
        Payload::Deferred(Box::new(producer))
    }

    /// Returns true if the payload has not been produced yet.
    pub fn is_deferred(&self) -> bool { matches!(self, Payload::Deferred(_)) }

    /// Consumes the payload, running the producer if needed.
    pub fn get(self) -> V {
        match self {
            Payload::Ready(value) => value,
            Payload::Deferred(producer) => {
                tracing::trace!("evaluating deferred payload");
                producer()
            }
        }
    }

    /// Runs a deferred producer and stores its value.
    pub fn force(self) -> Self { Payload::Ready(self.get()) }
}

impl<V> From<V> for Payload<V> {
    fn from(value: V) -> Self { Payload::Ready(value) }
}

impl<V: fmt::Debug> fmt::Debug for Payload<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Payload::Deferred(_) => f.write_str("Deferred(<deferred>)"),
        }
    }
}
