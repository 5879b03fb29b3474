use std::cmp::Ordering;

use chrono::NaiveDate;

use super::domain::{Decision, Grade, RequestId, RequestStatus, TransferRequest};

/// Storage abstraction over the `requests` table so the workflow can be
/// exercised against either backend.
pub trait RequestStore: Send + Sync {
    /// Ensure the table exists and seed the fixed demonstration records when
    /// it is empty. Safe to call repeatedly.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Every record, newest submission first, ties broken by id descending.
    /// Side-effect-free.
    fn list_all(&self) -> Result<Vec<TransferRequest>, StoreError>;

    /// Insert a new record, guarding id uniqueness as a primary-key
    /// constraint.
    fn create(&self, request: TransferRequest) -> Result<TransferRequest, StoreError>;

    /// Overwrite the status column of one record, leaving every other field
    /// untouched. Setting the status a record already carries is a no-op.
    fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request {0} already exists")]
    DuplicateId(RequestId),
    #[error("request {0} not found")]
    NotFound(RequestId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Listing order shared by the backends: submitted date descending, id
/// descending on ties. Lexicographic id comparison matches numeric order for
/// the `REQ-<n>` format.
pub(crate) fn listing_order(a: &TransferRequest, b: &TransferRequest) -> Ordering {
    b.submitted_date
        .cmp(&a.submitted_date)
        .then_with(|| b.id.0.cmp(&a.id.0))
}

/// Fixed demonstration rows inserted into an empty store.
pub(crate) fn seed_requests() -> Vec<TransferRequest> {
    vec![
        TransferRequest {
            id: RequestId("REQ-1001".to_string()),
            university_course: "CS101 Intro to Programming".to_string(),
            diploma_course: "PRG100 Fundamentals of C++".to_string(),
            grade: Grade::A,
            submitted_date: seed_date(2023, 10, 24),
            status: RequestStatus::Pending,
            evidence_file_name: "transcript_sem1.pdf".to_string(),
        },
        TransferRequest {
            id: RequestId("REQ-1002".to_string()),
            university_course: "MATH201 Calculus I".to_string(),
            diploma_course: "MAT101 Eng Math".to_string(),
            grade: Grade::B,
            submitted_date: seed_date(2023, 10, 25),
            status: RequestStatus::Approved,
            evidence_file_name: "math_syllabus.pdf".to_string(),
        },
        TransferRequest {
            id: RequestId("REQ-1003".to_string()),
            university_course: "ENG102 Academic Writing".to_string(),
            diploma_course: "COM101 Comm Skills".to_string(),
            grade: Grade::C,
            submitted_date: seed_date(2023, 10, 26),
            status: RequestStatus::Rejected,
            evidence_file_name: "results.png".to_string(),
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}
