use super::common::*;
use crate::workflows::transfer::domain::{
    Decision, RequestId, RequestStatus, ValidationError, DEFAULT_EVIDENCE_FILE,
};
use crate::workflows::transfer::service::TransferServiceError;
use crate::workflows::transfer::store::{RequestStore, StoreError};

#[test]
fn submit_assigns_the_next_sequential_id() {
    let (service, _) = build_service();

    let stored = service.submit(submission()).expect("submission succeeds");
    assert_eq!(stored.id.as_str(), "REQ-1004");
    assert_eq!(stored.status, RequestStatus::Pending);
    assert_eq!(stored.evidence_file_name, "ds_transcript.pdf");
}

#[test]
fn submit_rejects_blank_university_course() {
    let (service, store) = build_service();
    let mut bad_submission = submission();
    bad_submission.university_course = "   ".to_string();

    match service.submit(bad_submission) {
        Err(TransferServiceError::Validation(ValidationError::MissingUniversityCourse)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.list_all().expect("list").len(), 3);
}

#[test]
fn submit_rejects_blank_diploma_course() {
    let (service, store) = build_service();
    let mut bad_submission = submission();
    bad_submission.diploma_course = String::new();

    match service.submit(bad_submission) {
        Err(TransferServiceError::Validation(ValidationError::MissingDiplomaCourse)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.list_all().expect("list").len(), 3);
}

#[test]
fn submit_defaults_missing_evidence_to_the_sentinel() {
    let (service, _) = build_service();
    let mut no_evidence = submission();
    no_evidence.evidence_file_name = None;

    let stored = service.submit(no_evidence).expect("submission succeeds");
    assert_eq!(stored.evidence_file_name, DEFAULT_EVIDENCE_FILE);
}

#[test]
fn decide_approves_a_pending_request() {
    let (service, store) = build_service();
    let id = RequestId("REQ-1001".to_string());

    let decided = service
        .decide(&id, Decision::Approved)
        .expect("decision succeeds");
    assert_eq!(decided.status, RequestStatus::Approved);

    let listing = store.list_all().expect("list");
    let stored = listing
        .iter()
        .find(|request| request.id == id)
        .expect("record present");
    assert_eq!(stored.status, RequestStatus::Approved);
}

#[test]
fn decide_twice_with_the_same_outcome_is_a_noop() {
    let (service, _) = build_service();
    let id = RequestId("REQ-1001".to_string());

    let first = service
        .decide(&id, Decision::Rejected)
        .expect("first decision");
    let second = service
        .decide(&id, Decision::Rejected)
        .expect("repeat decision");
    assert_eq!(first, second);
}

#[test]
fn decide_refuses_to_flip_a_decided_request() {
    let (service, store) = build_service();
    let id = RequestId("REQ-1002".to_string());

    // REQ-1002 is seeded as Approved.
    match service.decide(&id, Decision::Rejected) {
        Err(TransferServiceError::AlreadyDecided { id: refused, status }) => {
            assert_eq!(refused, id);
            assert_eq!(status, RequestStatus::Approved);
        }
        other => panic!("expected already-decided error, got {other:?}"),
    }

    let listing = store.list_all().expect("list");
    let stored = listing
        .iter()
        .find(|request| request.id == id)
        .expect("record present");
    assert_eq!(stored.status, RequestStatus::Approved);
}

#[test]
fn decide_propagates_not_found() {
    let (service, _) = build_service();
    let id = RequestId("REQ-7777".to_string());

    match service.decide(&id, Decision::Approved) {
        Err(TransferServiceError::Store(StoreError::NotFound(missing))) => {
            assert_eq!(missing, id);
        }
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&RequestId("REQ-0000".to_string())) {
        Err(TransferServiceError::Store(StoreError::NotFound(_))) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn dashboards_derive_from_the_same_snapshot() {
    let (service, _) = build_service();

    let student = service.student_dashboard().expect("student view");
    assert_eq!(student.stats.total, 3);
    assert_eq!(student.stats.approved, 1);
    assert_eq!(student.stats.pending, 1);

    let admin = service.admin_dashboard().expect("admin view");
    assert_eq!(admin.stats.pending_count, 1);
    assert_eq!(admin.stats.approval_rate, 50);
    assert_eq!(admin.pending_queue.len(), 1);
    assert_eq!(admin.history.len(), 2);
}
