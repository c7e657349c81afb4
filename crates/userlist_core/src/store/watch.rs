//! Live query subscription plumbing.
//!
//! # Responsibility
//! - Track active watchers and their query filters.
//! - Deliver full-collection snapshots over per-watcher channels.
//!
//! # Invariants
//! - A watcher receives its initial snapshot before `subscribe` returns.
//! - A dropped `UserWatch` is removed from the registry and receives nothing
//!   further.

use crate::model::user::User;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{mpsc, Mutex, PoisonError, Weak};
use std::time::Duration;

/// Query predicate attached to a watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WatchFilter {
    /// Full record set.
    All,
    /// Records whose age equals the given value exactly.
    AgeEquals(i64),
}

struct WatchEntry {
    id: u64,
    filter: WatchFilter,
    tx: Sender<Vec<User>>,
}

/// Registry of active watchers, shared between the store and its watches.
pub(crate) struct WatchRegistry {
    next_id: u64,
    entries: Vec<WatchEntry>,
}

impl WatchRegistry {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registers a watcher and delivers its initial snapshot.
    pub(crate) fn register(
        &mut self,
        filter: WatchFilter,
        initial: Vec<User>,
    ) -> (u64, Receiver<Vec<User>>) {
        let (tx, rx) = mpsc::channel();
        // The receiver is alive here, so this send cannot fail.
        let _ = tx.send(initial);

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(WatchEntry { id, filter, tx });
        (id, rx)
    }

    pub(crate) fn unregister(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Pushes a fresh snapshot to every watcher.
    ///
    /// `snapshot_for` produces the snapshot matching a watcher's filter;
    /// returning `None` skips that watcher for this round. Watchers whose
    /// receiving side is gone are dropped from the registry.
    pub(crate) fn broadcast(
        &mut self,
        mut snapshot_for: impl FnMut(WatchFilter) -> Option<Vec<User>>,
    ) {
        self.entries.retain(|entry| match snapshot_for(entry.filter) {
            Some(snapshot) => entry.tx.send(snapshot).is_ok(),
            None => true,
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Live subscription to a user query.
///
/// Yields full-collection snapshots: one immediately on subscribe, then a
/// fresh one after every mutation that changes the record set. Snapshot order
/// within the collection is storage-defined and must not be relied upon.
pub struct UserWatch {
    id: u64,
    rx: Receiver<Vec<User>>,
    registry: Weak<Mutex<WatchRegistry>>,
}

impl UserWatch {
    pub(crate) fn new(
        id: u64,
        rx: Receiver<Vec<User>>,
        registry: Weak<Mutex<WatchRegistry>>,
    ) -> Self {
        Self { id, rx, registry }
    }

    /// Blocks until the next snapshot arrives or the store is gone.
    pub fn recv(&self) -> Result<Vec<User>, RecvError> {
        self.rx.recv()
    }

    /// Returns a pending snapshot without blocking.
    pub fn try_recv(&self) -> Result<Vec<User>, TryRecvError> {
        self.rx.try_recv()
    }

    /// Blocks up to `timeout` for the next snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Vec<User>, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for UserWatch {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .unregister(self.id);
        }
    }
}
