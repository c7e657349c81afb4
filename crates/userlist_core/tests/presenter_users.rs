use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use userlist_core::db::open_db_in_memory;
use userlist_core::{SqliteUserStore, User, UserListPresenter, UserRepository};

const WAIT_BUDGET: Duration = Duration::from_secs(5);

fn presenter() -> UserListPresenter {
    let store = SqliteUserStore::new(open_db_in_memory().unwrap());
    let repository = Arc::new(UserRepository::new(store));
    UserListPresenter::new(repository).unwrap()
}

fn wait_for_seeded_users(presenter: &UserListPresenter) -> Vec<User> {
    let users = presenter.users();
    let deadline = Instant::now() + WAIT_BUDGET;
    loop {
        let snapshot = users.get();
        if snapshot.len() == 7 {
            return snapshot;
        }
        assert!(
            Instant::now() < deadline,
            "seeded users never showed up; last snapshot had {} records",
            snapshot.len()
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn construction_seeds_and_publishes_all_seven_users() {
    let presenter = presenter();

    let mut snapshot = wait_for_seeded_users(&presenter);
    snapshot.sort_by_key(|user| user.id);

    assert_eq!(snapshot[0], User::new(1, "A", "G", 20));
    assert_eq!(snapshot[6], User::new(7, "G", "A", 26));
    let ages: Vec<i64> = snapshot.iter().map(|user| user.age).collect();
    assert_eq!(ages, vec![20, 21, 22, 23, 24, 25, 26]);
}

#[test]
fn observers_eventually_see_the_seeded_snapshot() {
    let presenter = presenter();
    let users = presenter.users();

    // Tracks the size of the last snapshot delivered to the observer. The
    // immediate delivery on observe counts, so this works no matter how far
    // the seed has progressed by the time the observer registers.
    let last_seen = Arc::new(AtomicUsize::new(usize::MAX));
    let last_seen_by_cb = Arc::clone(&last_seen);
    let token = users.observe(move |snapshot: &Vec<User>| {
        last_seen_by_cb.store(snapshot.len(), Ordering::SeqCst);
    });

    let deadline = Instant::now() + WAIT_BUDGET;
    while last_seen.load(Ordering::SeqCst) != 7 {
        assert!(Instant::now() < deadline, "observer never saw the full seed");
        std::thread::sleep(Duration::from_millis(10));
    }

    users.unobserve(token);
}

#[test]
fn dropping_the_presenter_joins_background_work() {
    let presenter = presenter();
    wait_for_seeded_users(&presenter);
    drop(presenter);
}

#[test]
fn dropping_the_presenter_early_does_not_hang() {
    let presenter = presenter();
    drop(presenter);
}
