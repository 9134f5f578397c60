//! User directory tests

use apexgate::directory::{seed_users, Role, UserDirectory, UserRecord, USERS_KEY};
use apexgate::store::{FileStore, KeyValue, MemoryStore};
use tempfile::tempdir;

fn seeded() -> UserDirectory {
    let mut directory = UserDirectory::open(Box::new(MemoryStore::new())).expect("open");
    directory.bootstrap().expect("bootstrap");
    directory
}

fn record(id: u32, email: &str, role: Role) -> UserRecord {
    UserRecord {
        id,
        email: email.to_string(),
        role,
        name: format!("User {id}"),
    }
}

#[test]
fn bootstrap_seeds_an_empty_store() {
    let mut directory = UserDirectory::open(Box::new(MemoryStore::new())).expect("open");
    assert!(directory.is_empty());

    let seeded = directory.bootstrap().expect("bootstrap");

    assert!(seeded);
    assert_eq!(directory.len(), 3);
    for role in Role::ALL {
        assert!(directory.find_first_by_role(role).is_some());
    }
}

#[test]
fn bootstrap_twice_equals_bootstrap_once() {
    let mut directory = seeded();

    let seeded_again = directory.bootstrap().expect("second bootstrap");

    assert!(!seeded_again);
    assert_eq!(directory.records(), seed_users().as_slice());
}

#[test]
fn bootstrap_never_overwrites_existing_accounts() {
    let mut store = MemoryStore::new();
    let custom = vec![record(9, "ada@apexlms.com", Role::Admin)];
    store
        .put_value(USERS_KEY, serde_json::to_value(&custom).unwrap())
        .unwrap();

    let mut directory = UserDirectory::open(Box::new(store)).expect("open");
    let seeded = directory.bootstrap().expect("bootstrap");

    assert!(!seeded);
    assert_eq!(directory.records(), custom.as_slice());
}

#[test]
fn find_by_email_returns_the_learner_seed() {
    let directory = seeded();

    let user = directory
        .find_by_email("student@apexlms.com")
        .expect("learner seed");

    assert_eq!(user.id, 3);
    assert_eq!(user.role, Role::Learner);
    assert_eq!(user.name, "Alice Student");
}

#[test]
fn find_by_email_ignores_case() {
    let directory = seeded();

    let user = directory
        .find_by_email("Student@ApexLMS.COM")
        .expect("learner seed");

    assert_eq!(user.id, 3);
}

#[test]
fn find_by_email_misses_unknown_accounts() {
    let directory = seeded();
    assert!(directory.find_by_email("nobody@x.com").is_none());
}

#[test]
fn find_first_by_role_follows_seed_order() {
    let directory = seeded();

    assert_eq!(
        directory.find_first_by_role(Role::Superadmin).map(|u| u.id),
        Some(1)
    );
    assert_eq!(
        directory.find_first_by_role(Role::Admin).map(|u| u.id),
        Some(2)
    );
    assert_eq!(
        directory.find_first_by_role(Role::Learner).map(|u| u.id),
        Some(3)
    );
}

#[test]
fn find_first_by_role_misses_on_an_empty_directory() {
    let directory = UserDirectory::open(Box::new(MemoryStore::new())).expect("open");
    assert!(directory.find_first_by_role(Role::Admin).is_none());
}

#[test]
fn duplicate_ids_are_rejected_at_open() {
    let mut store = MemoryStore::new();
    let users = vec![
        record(1, "one@apexlms.com", Role::Admin),
        record(1, "two@apexlms.com", Role::Learner),
    ];
    store
        .put_value(USERS_KEY, serde_json::to_value(&users).unwrap())
        .unwrap();

    assert!(UserDirectory::open(Box::new(store)).is_err());
}

#[test]
fn duplicate_emails_differing_only_in_case_are_rejected() {
    let mut store = MemoryStore::new();
    let users = vec![
        record(1, "one@apexlms.com", Role::Admin),
        record(2, "ONE@APEXLMS.COM", Role::Learner),
    ];
    store
        .put_value(USERS_KEY, serde_json::to_value(&users).unwrap())
        .unwrap();

    assert!(UserDirectory::open(Box::new(store)).is_err());
}

#[test]
fn seeded_directory_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    {
        let store = FileStore::open(&path).expect("open store");
        let mut directory = UserDirectory::open(Box::new(store)).expect("open directory");
        assert!(directory.bootstrap().expect("bootstrap"));
    }

    let store = FileStore::open(&path).expect("reopen store");
    let directory = UserDirectory::open(Box::new(store)).expect("reopen directory");

    assert_eq!(directory.len(), 3);
    assert!(directory.find_by_email("super@apexlms.com").is_some());
}

#[test]
fn bootstrap_on_a_reopened_store_stays_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    {
        let store = FileStore::open(&path).expect("open store");
        let mut directory = UserDirectory::open(Box::new(store)).expect("open directory");
        directory.bootstrap().expect("bootstrap");
    }

    let store = FileStore::open(&path).expect("reopen store");
    let mut directory = UserDirectory::open(Box::new(store)).expect("reopen directory");

    assert!(!directory.bootstrap().expect("bootstrap again"));
    assert_eq!(directory.records(), seed_users().as_slice());
}
