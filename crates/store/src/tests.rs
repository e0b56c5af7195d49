use super::ClaimStore;

#[test]
fn register_and_authenticate() {
    let store = ClaimStore::open_in_memory().unwrap();
    let id = store
        .register_user("Ada", "ada@example.com", "pw", Some(36), Some("London"))
        .unwrap();
    assert!(id.is_some());

    let account = store.authenticate("ada@example.com", "pw").unwrap().unwrap();
    assert_eq!(account.name, "Ada");
    assert_eq!(account.age, Some(36));

    assert!(store.authenticate("ada@example.com", "wrong").unwrap().is_none());
    assert!(store.authenticate("nobody@example.com", "pw").unwrap().is_none());
}

#[test]
fn duplicate_email_is_rejected() {
    let store = ClaimStore::open_in_memory().unwrap();
    store
        .register_user("Ada", "ada@example.com", "pw", None, None)
        .unwrap();
    let second = store
        .register_user("Imposter", "ada@example.com", "pw2", None, None)
        .unwrap();
    assert!(second.is_none());
}

#[test]
fn history_is_newest_first() {
    let store = ClaimStore::open_in_memory().unwrap();
    store
        .record_result("ada@example.com", 12.5, false, 0.12, 100)
        .unwrap();
    store
        .record_result("ada@example.com", 88.1, true, 0.91, 300)
        .unwrap();
    store
        .record_result("ada@example.com", 44.0, false, 0.40, 200)
        .unwrap();
    store
        .record_result("bob@example.com", 5.0, false, 0.05, 400)
        .unwrap();

    let history = store.history_for("ada@example.com").unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].created_at_unix, 300);
    assert_eq!(history[1].created_at_unix, 200);
    assert_eq!(history[2].created_at_unix, 100);
    assert!(history[0].is_fraud);
}

#[test]
fn same_timestamp_breaks_ties_by_insertion() {
    let store = ClaimStore::open_in_memory().unwrap();
    store.record_result("ada@example.com", 10.0, false, 0.1, 100).unwrap();
    store.record_result("ada@example.com", 20.0, false, 0.2, 100).unwrap();

    let history = store.history_for("ada@example.com").unwrap();
    assert_eq!(history[0].probability, 20.0);
    assert_eq!(history[1].probability, 10.0);
}

#[test]
fn history_is_empty_for_unknown_user() {
    let store = ClaimStore::open_in_memory().unwrap();
    assert!(store.history_for("ghost@example.com").unwrap().is_empty());
}
