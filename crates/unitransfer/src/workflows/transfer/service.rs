use std::sync::Arc;

use chrono::Local;

use super::domain::{
    Decision, RequestId, RequestStatus, RequestSubmission, TransferRequest, ValidationError,
};
use super::store::{RequestStore, StoreError};
use super::views::{AdminDashboard, StudentDashboard};

/// Base offset for the `REQ-<n>` running counter.
const ID_SEQUENCE_BASE: usize = 1000;

/// Service composing submission validation, id assignment, and the request
/// store. Every read derives from one authoritative `list_all` snapshot per
/// interaction.
pub struct TransferRequestService<R> {
    store: Arc<R>,
}

impl<R> TransferRequestService<R>
where
    R: RequestStore + 'static,
{
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// Validate and persist a new student submission.
    ///
    /// The id suffix derives from a freshly read record count. Two racing
    /// submitters can draw the same suffix; the store's primary-key guard
    /// then surfaces a duplicate-id error instead of corrupting state, and
    /// the caller retries the submission.
    pub fn submit(
        &self,
        submission: RequestSubmission,
    ) -> Result<TransferRequest, TransferServiceError> {
        submission.validate()?;

        let existing = self.store.list_all()?;
        let request = TransferRequest {
            id: RequestId::from_sequence(ID_SEQUENCE_BASE + existing.len() + 1),
            university_course: submission.university_course.clone(),
            diploma_course: submission.diploma_course.clone(),
            grade: submission.grade,
            submitted_date: Local::now().date_naive(),
            status: RequestStatus::Pending,
            evidence_file_name: submission.evidence_or_default(),
        };

        let stored = self.store.create(request)?;
        Ok(stored)
    }

    /// Apply an admin decision to a pending request.
    ///
    /// Repeating the decision already on record is a no-op; moving a decided
    /// request to the other terminal status is refused.
    pub fn decide(
        &self,
        id: &RequestId,
        decision: Decision,
    ) -> Result<TransferRequest, TransferServiceError> {
        let snapshot = self.store.list_all()?;
        let mut record = snapshot
            .into_iter()
            .find(|request| &request.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if record.status == decision.as_status() {
            return Ok(record);
        }
        if record.status.is_decided() {
            return Err(TransferServiceError::AlreadyDecided {
                id: id.clone(),
                status: record.status,
            });
        }

        self.store.update_status(id, decision)?;
        record.status = decision.as_status();
        Ok(record)
    }

    /// The full ordered listing.
    pub fn list(&self) -> Result<Vec<TransferRequest>, TransferServiceError> {
        Ok(self.store.list_all()?)
    }

    /// Fetch a single request for API responses.
    pub fn get(&self, id: &RequestId) -> Result<TransferRequest, TransferServiceError> {
        let snapshot = self.store.list_all()?;
        snapshot
            .into_iter()
            .find(|request| &request.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()).into())
    }

    /// Student portal view: counters plus full application history.
    pub fn student_dashboard(&self) -> Result<StudentDashboard, TransferServiceError> {
        let snapshot = self.store.list_all()?;
        Ok(StudentDashboard::from_requests(&snapshot))
    }

    /// Admin view: counters, pending review queue, decided history.
    pub fn admin_dashboard(&self) -> Result<AdminDashboard, TransferServiceError> {
        let snapshot = self.store.list_all()?;
        Ok(AdminDashboard::from_requests(&snapshot))
    }
}

/// Error raised by the transfer workflow.
#[derive(Debug, thiserror::Error)]
pub enum TransferServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("request {id} was already decided ({})", .status.label())]
    AlreadyDecided { id: RequestId, status: RequestStatus },
}
