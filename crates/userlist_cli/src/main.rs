//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `userlist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use userlist_core::db::open_db_in_memory;
use userlist_core::{SqliteUserStore, UserRepository};

fn main() {
    println!("userlist_core version={}", userlist_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory database: {err}");
            std::process::exit(1);
        }
    };

    let repository = UserRepository::new(SqliteUserStore::new(conn));
    if let Err(err) = repository.try_update_recent_users_cache() {
        eprintln!("failed to seed users: {err}");
        std::process::exit(1);
    }

    let watch = match repository.get_users() {
        Ok(watch) => watch,
        Err(err) => {
            eprintln!("failed to subscribe to users: {err}");
            std::process::exit(1);
        }
    };

    if let Ok(users) = watch.try_recv() {
        for user in users {
            println!(
                "user id={} first_name={} last_name={} age={}",
                user.id, user.first_name, user.last_name, user.age
            );
        }
    }
}
