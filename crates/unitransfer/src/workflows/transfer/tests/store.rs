use super::common::*;
use crate::workflows::transfer::domain::{Decision, RequestId, RequestStatus};
use crate::workflows::transfer::memory::InMemoryRequestStore;
use crate::workflows::transfer::sqlite::SqliteRequestStore;
use crate::workflows::transfer::store::{RequestStore, StoreError};

#[test]
fn initialize_seeds_three_fixed_records() {
    let store = InMemoryRequestStore::new();
    store.initialize().expect("initialize");

    let listing = store.list_all().expect("list");
    assert_eq!(listing.len(), 3);

    // Newest submission first: the rejected seed carries the latest date.
    let ids: Vec<&str> = listing.iter().map(|request| request.id.as_str()).collect();
    assert_eq!(ids, vec!["REQ-1003", "REQ-1002", "REQ-1001"]);

    let statuses: Vec<RequestStatus> = listing.iter().map(|request| request.status).collect();
    assert_eq!(
        statuses,
        vec![
            RequestStatus::Rejected,
            RequestStatus::Approved,
            RequestStatus::Pending,
        ]
    );
}

#[test]
fn initialize_is_idempotent() {
    let store = InMemoryRequestStore::new();
    store.initialize().expect("first initialize");
    store.initialize().expect("second initialize");

    assert_eq!(store.list_all().expect("list").len(), 3);
}

#[test]
fn create_rejects_duplicate_id() {
    let store = seeded_store();
    let duplicate = request("REQ-1001", (2024, 1, 10), RequestStatus::Pending);

    match store.create(duplicate) {
        Err(StoreError::DuplicateId(id)) => assert_eq!(id.as_str(), "REQ-1001"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
    assert_eq!(store.list_all().expect("list").len(), 3);
}

#[test]
fn update_status_rejects_unknown_id() {
    let store = seeded_store();
    let id = RequestId("REQ-9999".to_string());

    match store.update_status(&id, Decision::Approved) {
        Err(StoreError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn update_status_touches_only_the_status_field() {
    let store = seeded_store();
    let before = store.list_all().expect("list before");

    store
        .update_status(&RequestId("REQ-1001".to_string()), Decision::Approved)
        .expect("update succeeds");

    let after = store.list_all().expect("list after");
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id.as_str() == "REQ-1001" {
            assert_eq!(new.status, RequestStatus::Approved);
            assert_eq!(old.university_course, new.university_course);
            assert_eq!(old.diploma_course, new.diploma_course);
            assert_eq!(old.grade, new.grade);
            assert_eq!(old.submitted_date, new.submitted_date);
            assert_eq!(old.evidence_file_name, new.evidence_file_name);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn update_status_is_idempotent() {
    let store = seeded_store();
    let id = RequestId("REQ-1001".to_string());

    store
        .update_status(&id, Decision::Approved)
        .expect("first update");
    let once = store.list_all().expect("list once");

    store
        .update_status(&id, Decision::Approved)
        .expect("second update");
    let twice = store.list_all().expect("list twice");

    assert_eq!(once, twice);
}

#[test]
fn listing_breaks_date_ties_by_id_descending() {
    let store = seeded_store();
    store
        .create(request("REQ-1005", (2023, 10, 26), RequestStatus::Pending))
        .expect("insert first tie");
    store
        .create(request("REQ-1004", (2023, 10, 26), RequestStatus::Pending))
        .expect("insert second tie");

    let listing = store.list_all().expect("list");
    let ids: Vec<&str> = listing
        .iter()
        .map(|request| request.id.as_str())
        .take(3)
        .collect();
    assert_eq!(ids, vec!["REQ-1005", "REQ-1004", "REQ-1003"]);
}

#[test]
fn sqlite_store_seeds_and_survives_reopen() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let db_path = temp_dir.path().join("requests.db");

    {
        let store = SqliteRequestStore::new(&db_path);
        store.initialize().expect("initialize");
        assert_eq!(store.list_all().expect("list").len(), 3);
    }

    let reopened = SqliteRequestStore::new(&db_path);
    reopened.initialize().expect("re-initialize");

    let listing = reopened.list_all().expect("list after reopen");
    assert_eq!(listing.len(), 3);
    let ids: Vec<&str> = listing.iter().map(|request| request.id.as_str()).collect();
    assert_eq!(ids, vec!["REQ-1003", "REQ-1002", "REQ-1001"]);
}

#[test]
fn sqlite_store_enforces_primary_key() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let store = SqliteRequestStore::new(temp_dir.path().join("requests.db"));
    store.initialize().expect("initialize");

    let duplicate = request("REQ-1002", (2024, 2, 2), RequestStatus::Pending);
    match store.create(duplicate) {
        Err(StoreError::DuplicateId(id)) => assert_eq!(id.as_str(), "REQ-1002"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
    assert_eq!(store.list_all().expect("list").len(), 3);
}

#[test]
fn sqlite_store_persists_status_updates() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let db_path = temp_dir.path().join("requests.db");

    let store = SqliteRequestStore::new(&db_path);
    store.initialize().expect("initialize");
    store
        .update_status(&RequestId("REQ-1001".to_string()), Decision::Rejected)
        .expect("update succeeds");

    let reopened = SqliteRequestStore::new(&db_path);
    let listing = reopened.list_all().expect("list");
    let updated = listing
        .iter()
        .find(|request| request.id.as_str() == "REQ-1001")
        .expect("record present");
    assert_eq!(updated.status, RequestStatus::Rejected);
    assert_eq!(updated.evidence_file_name, "transcript_sem1.pdf");
}

#[test]
fn sqlite_store_reports_unknown_id_on_update() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let store = SqliteRequestStore::new(temp_dir.path().join("requests.db"));
    store.initialize().expect("initialize");

    let id = RequestId("REQ-4242".to_string());
    match store.update_status(&id, Decision::Approved) {
        Err(StoreError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("expected not found error, got {other:?}"),
    }
}
