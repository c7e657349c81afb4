//! User repository: pass-through reads plus the seed operation.
//!
//! # Responsibility
//! - Hand out the store's live watches unmodified.
//! - Replace the whole record set with the fixed seven-user list.
//!
//! # Invariants
//! - The seed sequence goes through the store's public operations; there is
//!   no transaction around it, so a concurrent watcher may observe the
//!   transient empty state between the delete and the first insert.

use crate::db::DbResult;
use crate::model::user::User;
use crate::store::user_store::UserStore;
use crate::store::watch::UserWatch;

/// Business-facing wrapper around a [`UserStore`].
pub struct UserRepository<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Live watch over all users, unmodified from the store.
    pub fn get_users(&self) -> DbResult<UserWatch> {
        self.store.get_all()
    }

    /// Live watch filtered by exact age equality, unmodified from the store.
    ///
    /// Inherits the predicate of
    /// [`UserStore::get_all_with_over_age`]: `age = ?`, not `age > ?`.
    pub fn get_users_with_over_age(&self, age: i64) -> DbResult<UserWatch> {
        self.store.get_all_with_over_age(age)
    }

    /// Deletes every record, then inserts the fixed seven-user list.
    ///
    /// Unconditional despite the name: no cache-validity check, no fetch.
    /// Final state is the same no matter how many times this runs.
    pub fn try_update_recent_users_cache(&self) -> DbResult<()> {
        self.store.delete_all()?;
        for user in recent_users() {
            self.store.insert(&user)?;
        }
        Ok(())
    }
}

fn recent_users() -> [User; 7] {
    [
        User::new(1, "A", "G", 20),
        User::new(2, "B", "F", 21),
        User::new(3, "C", "E", 22),
        User::new(4, "D", "D", 23),
        User::new(5, "E", "C", 24),
        User::new(6, "F", "B", 25),
        User::new(7, "G", "A", 26),
    ]
}
