//! Last-value observable for UI binding.
//!
//! # Responsibility
//! - Hold the latest published value for passive reads.
//! - Invoke registered observers on every publish.
//!
//! # Invariants
//! - `observe` delivers the current value to the new observer immediately.
//! - Observer callbacks must not call `observe`/`unobserve` on the same
//!   `Live`; the observer list is locked while callbacks run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Handle returned by [`Live::observe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverToken(u64);

type Callback<T> = Box<dyn Fn(&T) + Send>;

struct LiveInner<T> {
    value: Mutex<T>,
    observers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

/// Shareable last-value observable.
///
/// Clones share the same underlying value and observer list. A UI layer
/// reads with [`Live::get`] or registers a callback with [`Live::observe`];
/// the owning side publishes with [`Live::set`].
pub struct Live<T> {
    inner: Arc<LiveInner<T>>,
}

impl<T> Clone for Live<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Live<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(LiveInner {
                value: Mutex::new(initial),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the latest published value.
    pub fn get(&self) -> T {
        self.inner
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes a new value and invokes every observer with it.
    pub fn set(&self, value: T) {
        *self
            .inner
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = value.clone();

        let observers = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, callback) in observers.iter() {
            callback(&value);
        }
    }

    /// Registers an observer and delivers the current value to it at once.
    pub fn observe(&self, callback: impl Fn(&T) + Send + 'static) -> ObserverToken {
        let current = self.get();
        callback(&current);

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(callback)));
        ObserverToken(id)
    }

    /// Removes a previously registered observer. Unknown tokens are ignored.
    pub fn unobserve(&self, token: ObserverToken) {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(id, _)| *id != token.0);
    }
}
