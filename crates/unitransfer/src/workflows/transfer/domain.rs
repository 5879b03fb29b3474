use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for transfer requests, formatted `REQ-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl RequestId {
    /// Build an id from the running counter used by the submission workflow.
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("REQ-{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grade scale accepted on submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Parse a stored or user-entered label. Anything outside the accepted
    /// scale returns `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "A+" => Some(Grade::APlus),
            "A" => Some(Grade::A),
            "A-" => Some(Grade::AMinus),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            _ => None,
        }
    }
}

/// Review status tracked for every transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "Pending" => Some(RequestStatus::Pending),
            "Approved" => Some(RequestStatus::Approved),
            "Rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    /// Approved and Rejected are terminal; the workflow never moves a request
    /// out of them.
    pub const fn is_decided(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// Admin review outcome, kept separate from `RequestStatus` so a status
/// update can never be handed `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub const fn as_status(self) -> RequestStatus {
        match self {
            Decision::Approved => RequestStatus::Approved,
            Decision::Rejected => RequestStatus::Rejected,
        }
    }
}

/// The sole persisted entity: one student claim that a completed diploma
/// course satisfies a university course requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub id: RequestId,
    pub university_course: String,
    pub diploma_course: String,
    pub grade: Grade,
    /// Stamped at creation, immutable afterwards.
    pub submitted_date: NaiveDate,
    pub status: RequestStatus,
    /// Filename reference only; evidence content is never persisted.
    pub evidence_file_name: String,
}

/// Filename recorded when a submission arrives without an evidence upload.
pub const DEFAULT_EVIDENCE_FILE: &str = "manual_submission.pdf";

/// Student-provided fields for a new transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmission {
    pub university_course: String,
    pub diploma_course: String,
    pub grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_file_name: Option<String>,
}

impl RequestSubmission {
    /// Course fields must carry content; whitespace-only input counts as
    /// missing. Nothing is written when validation fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.university_course.trim().is_empty() {
            return Err(ValidationError::MissingUniversityCourse);
        }
        if self.diploma_course.trim().is_empty() {
            return Err(ValidationError::MissingDiplomaCourse);
        }
        Ok(())
    }

    /// A missing evidence upload is not an error; it falls back to the
    /// manual-submission sentinel.
    pub fn evidence_or_default(&self) -> String {
        match self.evidence_file_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_EVIDENCE_FILE.to_string(),
        }
    }
}

/// Rejected submission input, recovered locally: the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("target university course is required")]
    MissingUniversityCourse,
    #[error("previous diploma course is required")]
    MissingDiplomaCourse,
}
