//! Domain model for the user list.
//!
//! # Responsibility
//! - Define the canonical user record persisted by the store.
//!
//! # Invariants
//! - `id` is caller-assigned and never generated by this crate.
//! - Records are flat: no relationships, no tombstones, no timestamps.

pub mod user;
