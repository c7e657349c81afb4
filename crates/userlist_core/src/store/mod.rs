//! Record store layer: durable user persistence plus live query watches.
//!
//! # Responsibility
//! - Define the storage contract for user records.
//! - Isolate SQLite query details from repository/presentation layers.
//!
//! # Invariants
//! - Every mutating operation that changes the record set pushes a fresh
//!   full snapshot to all active watchers.
//! - Watches are unbounded in lifetime; dropping a watch unregisters it.

pub mod user_store;
pub mod watch;
