//! Credit-transfer request intake, review, and reporting.
//!
//! `domain` carries the single persisted entity and its status state
//! machine, `store` the persistence seam with in-memory and SQLite backends,
//! `service` the submission and review workflow, and `views` the pure
//! derivations behind the student and admin screens.

pub mod domain;
pub mod memory;
pub mod router;
pub mod service;
pub mod sqlite;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Decision, Grade, RequestId, RequestStatus, RequestSubmission, TransferRequest,
    ValidationError, DEFAULT_EVIDENCE_FILE,
};
pub use memory::InMemoryRequestStore;
pub use router::transfer_router;
pub use service::{TransferRequestService, TransferServiceError};
pub use sqlite::SqliteRequestStore;
pub use store::{RequestStore, StoreError};
pub use views::{
    AdminDashboard, AdminStats, QueuePartition, RequestView, StudentDashboard, StudentStats,
};
