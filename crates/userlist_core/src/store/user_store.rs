//! User store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the four storage operations over the canonical `users` table.
//! - Notify active watchers with a refreshed snapshot after each mutation.
//!
//! # Invariants
//! - `id` conflicts surface as the storage layer's native constraint error;
//!   no validation happens above SQLite.
//! - Queries carry no ORDER BY; row order is storage-defined.

use crate::db::DbResult;
use crate::model::user::User;
use crate::store::watch::{UserWatch, WatchFilter, WatchRegistry};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const USER_SELECT_SQL: &str = "SELECT id, first_name, last_name, age FROM users";

/// Storage contract for user records.
///
/// Implementations must be shareable across threads; the presentation layer
/// seeds from a background thread while watches are pumped elsewhere.
pub trait UserStore: Send + Sync {
    /// Adds one record. Duplicate ids fail with the store's native error.
    fn insert(&self, user: &User) -> DbResult<()>;

    /// Removes the record matching the given record's `id`.
    ///
    /// No-op when no row matches; watchers are not notified in that case.
    fn delete(&self, user: &User) -> DbResult<()>;

    /// Removes every record unconditionally.
    fn delete_all(&self) -> DbResult<()>;

    /// Live watch over the full record set.
    fn get_all(&self) -> DbResult<UserWatch>;

    /// Live watch filtered by **exact** age equality.
    ///
    /// The predicate is `age = ?`, not `age > ?`, despite the name.
    fn get_all_with_over_age(&self, age: i64) -> DbResult<UserWatch>;
}

/// SQLite-backed user store.
///
/// Owns the connection behind a mutex so one store instance can serve
/// concurrent callers. Lock order is connection first, then watchers.
pub struct SqliteUserStore {
    conn: Mutex<Connection>,
    watchers: Arc<Mutex<WatchRegistry>>,
}

impl SqliteUserStore {
    /// Wraps an already-bootstrapped connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            watchers: Arc::new(Mutex::new(WatchRegistry::new())),
        }
    }

    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_watchers(&self) -> MutexGuard<'_, WatchRegistry> {
        self.watchers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(conn: &Connection, filter: WatchFilter) -> DbResult<Vec<User>> {
        let (sql, age) = match filter {
            WatchFilter::All => (USER_SELECT_SQL.to_string(), None),
            WatchFilter::AgeEquals(age) => (format!("{USER_SELECT_SQL} WHERE age = ?1"), Some(age)),
        };

        let mut stmt = conn.prepare(&sql)?;
        let mut rows = match age {
            Some(age) => stmt.query(params![age])?,
            None => stmt.query([])?,
        };

        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(User {
                id: row.get("id")?,
                first_name: row.get("first_name")?,
                last_name: row.get("last_name")?,
                age: row.get("age")?,
            });
        }
        Ok(users)
    }

    /// Re-queries per watcher filter and pushes the refreshed snapshots.
    ///
    /// A failed re-query skips the watcher for this round rather than
    /// tearing it down.
    fn notify_watchers(&self, conn: &Connection) {
        self.lock_watchers()
            .broadcast(|filter| Self::snapshot(conn, filter).ok());
    }

    fn subscribe(&self, filter: WatchFilter) -> DbResult<UserWatch> {
        let conn = self.lock_conn();
        let initial = Self::snapshot(&conn, filter)?;

        let (id, rx) = self.lock_watchers().register(filter, initial);
        Ok(UserWatch::new(id, rx, Arc::downgrade(&self.watchers)))
    }
}

impl UserStore for SqliteUserStore {
    fn insert(&self, user: &User) -> DbResult<()> {
        let conn = self.lock_conn();
        conn.execute(
            "INSERT INTO users (id, first_name, last_name, age) VALUES (?1, ?2, ?3, ?4);",
            params![user.id, user.first_name, user.last_name, user.age],
        )?;

        self.notify_watchers(&conn);
        Ok(())
    }

    fn delete(&self, user: &User) -> DbResult<()> {
        let conn = self.lock_conn();
        let changed = conn.execute("DELETE FROM users WHERE id = ?1;", params![user.id])?;

        if changed > 0 {
            self.notify_watchers(&conn);
        }
        Ok(())
    }

    fn delete_all(&self) -> DbResult<()> {
        let conn = self.lock_conn();
        let changed = conn.execute("DELETE FROM users;", [])?;

        if changed > 0 {
            self.notify_watchers(&conn);
        }
        Ok(())
    }

    fn get_all(&self) -> DbResult<UserWatch> {
        self.subscribe(WatchFilter::All)
    }

    fn get_all_with_over_age(&self, age: i64) -> DbResult<UserWatch> {
        self.subscribe(WatchFilter::AgeEquals(age))
    }
}
