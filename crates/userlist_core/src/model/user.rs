//! User domain record.
//!
//! # Responsibility
//! - Define the sole persisted entity of this crate.
//!
//! # Invariants
//! - `id` uniqueness is enforced by the storage layer's primary-key
//!   constraint, not by any validation here.

use serde::{Deserialize, Serialize};

/// Stable caller-assigned identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// Canonical user record.
///
/// All fields are required; there is no partial or draft shape. The store
/// rejects duplicate `id` values with its native constraint error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned primary key.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
}

impl User {
    /// Creates a fully-populated user record.
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}
