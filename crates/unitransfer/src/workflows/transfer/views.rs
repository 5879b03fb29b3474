//! Pure derivations over one listing snapshot. Nothing here touches the
//! store; both dashboards are rebuilt from scratch on every interaction so a
//! view can never go stale against the table.

use serde::Serialize;

use super::domain::{RequestStatus, TransferRequest};

/// Counters shown on the student portal header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

impl StudentStats {
    pub fn from_requests(requests: &[TransferRequest]) -> Self {
        Self {
            total: requests.len(),
            approved: count_status(requests, RequestStatus::Approved),
            pending: count_status(requests, RequestStatus::Pending),
        }
    }
}

/// Counters shown on the admin dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub pending_count: usize,
    /// Percentage of decided requests that were approved, rounded to the
    /// nearest whole percent. 0 while nothing has been decided.
    pub approval_rate: u8,
}

impl AdminStats {
    pub fn from_requests(requests: &[TransferRequest]) -> Self {
        let pending_count = count_status(requests, RequestStatus::Pending);
        let decided = requests.len() - pending_count;
        let approval_rate = if decided == 0 {
            0
        } else {
            let approved = count_status(requests, RequestStatus::Approved);
            ((approved as f64 / decided as f64) * 100.0).round() as u8
        };

        Self {
            pending_count,
            approval_rate,
        }
    }
}

fn count_status(requests: &[TransferRequest], status: RequestStatus) -> usize {
    requests
        .iter()
        .filter(|request| request.status == status)
        .count()
}

/// Order-preserving split of the listing into the admin review queue and the
/// decided history. The two sides are disjoint and together cover the full
/// listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuePartition {
    pub pending: Vec<TransferRequest>,
    pub history: Vec<TransferRequest>,
}

impl QueuePartition {
    pub fn from_requests(requests: &[TransferRequest]) -> Self {
        let (pending, history) = requests
            .iter()
            .cloned()
            .partition(|request| request.status == RequestStatus::Pending);

        Self { pending, history }
    }
}

/// Serialization snapshot of a request for API responses and the demo
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestView {
    pub id: String,
    pub university_course: String,
    pub diploma_course: String,
    pub grade: &'static str,
    pub submitted_date: String,
    pub status: &'static str,
    pub evidence_file_name: String,
}

impl RequestView {
    pub fn from_request(request: &TransferRequest) -> Self {
        Self {
            id: request.id.0.clone(),
            university_course: request.university_course.clone(),
            diploma_course: request.diploma_course.clone(),
            grade: request.grade.label(),
            submitted_date: request.submitted_date.format("%Y-%m-%d").to_string(),
            status: request.status.label(),
            evidence_file_name: request.evidence_file_name.clone(),
        }
    }
}

/// Student portal payload.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub stats: StudentStats,
    pub requests: Vec<RequestView>,
}

impl StudentDashboard {
    pub fn from_requests(requests: &[TransferRequest]) -> Self {
        Self {
            stats: StudentStats::from_requests(requests),
            requests: requests.iter().map(RequestView::from_request).collect(),
        }
    }
}

/// Admin dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub pending_queue: Vec<RequestView>,
    pub history: Vec<RequestView>,
}

impl AdminDashboard {
    pub fn from_requests(requests: &[TransferRequest]) -> Self {
        let partition = QueuePartition::from_requests(requests);

        Self {
            stats: AdminStats::from_requests(requests),
            pending_queue: partition
                .pending
                .iter()
                .map(RequestView::from_request)
                .collect(),
            history: partition
                .history
                .iter()
                .map(RequestView::from_request)
                .collect(),
        }
    }
}
