use std::sync::Arc;

use chrono::NaiveDate;

use crate::workflows::transfer::domain::{
    Grade, RequestId, RequestStatus, RequestSubmission, TransferRequest,
};
use crate::workflows::transfer::memory::InMemoryRequestStore;
use crate::workflows::transfer::service::TransferRequestService;
use crate::workflows::transfer::store::RequestStore;

pub(super) fn submission() -> RequestSubmission {
    RequestSubmission {
        university_course: "CS205 Data Structures".to_string(),
        diploma_course: "DIT210 Algorithms Fundamentals".to_string(),
        grade: Grade::AMinus,
        evidence_file_name: Some("ds_transcript.pdf".to_string()),
    }
}

pub(super) fn request(id: &str, date: (i32, u32, u32), status: RequestStatus) -> TransferRequest {
    TransferRequest {
        id: RequestId(id.to_string()),
        university_course: "CS101 Intro to Programming".to_string(),
        diploma_course: "PRG100 Fundamentals of C++".to_string(),
        grade: Grade::B,
        submitted_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        status,
        evidence_file_name: "transcript.pdf".to_string(),
    }
}

pub(super) fn seeded_store() -> Arc<InMemoryRequestStore> {
    let store = Arc::new(InMemoryRequestStore::new());
    store.initialize().expect("memory store initializes");
    store
}

pub(super) fn build_service() -> (
    TransferRequestService<InMemoryRequestStore>,
    Arc<InMemoryRequestStore>,
) {
    let store = seeded_store();
    (TransferRequestService::new(store.clone()), store)
}
