//! Core logic for the seeded, observable user list.
//! This crate is the single source of truth for the record set and its
//! live-query semantics.

pub mod db;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId};
pub use presenter::live::{Live, ObserverToken};
pub use presenter::user_list::UserListPresenter;
pub use repo::user_repo::UserRepository;
pub use store::user_store::{SqliteUserStore, UserStore};
pub use store::watch::UserWatch;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
