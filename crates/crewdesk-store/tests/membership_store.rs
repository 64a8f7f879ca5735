use crewdesk_store::{FileMembershipStore, InMemoryMembershipStore, MembershipStore};
use std::collections::BTreeSet;

#[test]
fn file_store_round_trips_and_survives_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileMembershipStore::new(dir.path().join("history_ids.json"));

    assert!(store.load().expect("empty load").is_empty());

    store.insert("POST-3").expect("insert");
    store.insert("POST-1").expect("insert");
    assert!(store.contains("POST-3").expect("contains"));

    let reopened = FileMembershipStore::new(dir.path().join("history_ids.json"));
    let ids = reopened.load().expect("load");
    assert_eq!(
        ids,
        BTreeSet::from(["POST-1".to_string(), "POST-3".to_string()])
    );

    reopened.remove("POST-1").expect("remove");
    assert!(!reopened.contains("POST-1").expect("contains"));
}

#[test]
fn file_store_rejects_non_array_payloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history_ids.json");
    std::fs::write(&path, b"{\"not\":\"an array\"}").expect("seed file");
    let store = FileMembershipStore::new(&path);
    assert!(store.load().is_err());
}

#[test]
fn in_memory_store_behaves_like_the_file_store() {
    let store = InMemoryMembershipStore::default();
    store.insert("POST-9").expect("insert");
    assert!(store.contains("POST-9").expect("contains"));
    store.remove("POST-9").expect("remove");
    assert!(store.load().expect("load").is_empty());
}
