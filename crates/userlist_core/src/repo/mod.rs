//! Repository layer: business-facing access to the user store.
//!
//! # Responsibility
//! - Expose read subscriptions unmodified from the store.
//! - Own the seed operation that resets the record set to the fixed list.

pub mod user_repo;
