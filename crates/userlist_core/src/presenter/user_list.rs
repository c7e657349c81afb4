//! User list presenter.
//!
//! # Responsibility
//! - Seed the record set once, in the background, at construction.
//! - Republish the repository's "all users" watch as a [`Live`] value.
//!
//! # Invariants
//! - The seed task's outcome is never observed: not returned, not logged.
//! - Dropping the presenter stops the pump thread and joins both threads.

use crate::db::DbResult;
use crate::presenter::live::Live;
use crate::repo::user_repo::UserRepository;
use crate::model::user::User;
use crate::store::user_store::UserStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const PUMP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Observable projection of the user list for a UI layer to bind to.
///
/// Construction kicks off the fire-and-forget seed and starts a pump thread
/// that mirrors every store snapshot into the exposed [`Live`] value.
pub struct UserListPresenter {
    users: Live<Vec<User>>,
    stop: Arc<AtomicBool>,
    pump: Option<JoinHandle<()>>,
    seed: Option<JoinHandle<()>>,
}

impl UserListPresenter {
    /// Builds the presenter and schedules the background seed.
    ///
    /// Fails only if the initial "all users" subscription cannot be created;
    /// the seed itself has no failure path visible to the caller.
    pub fn new<S>(repository: Arc<UserRepository<S>>) -> DbResult<Self>
    where
        S: UserStore + 'static,
    {
        let watch = repository.get_users()?;
        let users = Live::new(Vec::new());
        let stop = Arc::new(AtomicBool::new(false));

        let pump = {
            let users = users.clone();
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    match watch.recv_timeout(PUMP_POLL_INTERVAL) {
                        Ok(snapshot) => users.set(snapshot),
                        Err(RecvTimeoutError::Timeout) => continue,
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
        };

        let seed = {
            let repository = Arc::clone(&repository);
            std::thread::spawn(move || {
                // Fire-and-forget by contract: the result is discarded.
                let _ = repository.try_update_recent_users_cache();
            })
        };

        Ok(Self {
            users,
            stop,
            pump: Some(pump),
            seed: Some(seed),
        })
    }

    /// Live view of all users. Starts out empty until the first snapshot
    /// from the store is pumped through.
    pub fn users(&self) -> Live<Vec<User>> {
        self.users.clone()
    }
}

impl Drop for UserListPresenter {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.seed.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.pump.take() {
            let _ = handle.join();
        }
    }
}
