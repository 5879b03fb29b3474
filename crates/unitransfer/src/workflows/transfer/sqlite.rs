//! SQLite `RequestStore` backend.
//!
//! Durable storage for the deployed service. Every operation opens its own
//! connection, runs, and closes it: no pool and no transaction spanning user
//! actions. Each interaction is a short synchronous call against a local
//! database file.

use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode};
use tracing::info;

use super::domain::{Decision, Grade, RequestId, RequestStatus, TransferRequest};
use super::store::{seed_requests, RequestStore, StoreError};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SqliteRequestStore {
    path: PathBuf,
}

impl SqliteRequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path)
            .map_err(|err| StoreError::Unavailable(format!("open database: {err}")))
    }
}

impl RequestStore for SqliteRequestStore {
    fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    StoreError::Unavailable(format!(
                        "create database directory {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        let conn = self.open()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS requests (
                id TEXT PRIMARY KEY,
                university_course TEXT NOT NULL,
                diploma_course TEXT NOT NULL,
                grade TEXT NOT NULL,
                submitted_date TEXT NOT NULL,
                status TEXT NOT NULL,
                evidence_file_name TEXT NOT NULL
            )",
            [],
        )
        .map_err(storage_error("create requests table"))?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM requests", [], |row| row.get(0))
            .map_err(storage_error("count requests"))?;
        if count == 0 {
            for request in seed_requests() {
                insert_request(&conn, &request)?;
            }
            info!(path = %self.path.display(), "seeded demonstration requests");
        }

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<TransferRequest>, StoreError> {
        let conn = self.open()?;
        let mut statement = conn
            .prepare(
                "SELECT id, university_course, diploma_course, grade, submitted_date, status,
                        evidence_file_name
                 FROM requests
                 ORDER BY submitted_date DESC, id DESC",
            )
            .map_err(storage_error("prepare listing"))?;

        let rows = statement
            .query_map([], read_raw_row)
            .map_err(storage_error("query requests"))?;

        let mut listing = Vec::new();
        for row in rows {
            let raw = row.map_err(storage_error("read request row"))?;
            listing.push(parse_row(raw)?);
        }
        Ok(listing)
    }

    fn create(&self, request: TransferRequest) -> Result<TransferRequest, StoreError> {
        let conn = self.open()?;
        insert_request(&conn, &request)?;
        Ok(request)
    }

    fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), StoreError> {
        let conn = self.open()?;
        let updated = conn
            .execute(
                "UPDATE requests SET status = ?1 WHERE id = ?2",
                params![decision.as_status().label(), id.0],
            )
            .map_err(storage_error("update request status"))?;

        if updated == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}

type RawRequestRow = (String, String, String, String, String, String, String);

fn read_raw_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRequestRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn parse_row(raw: RawRequestRow) -> Result<TransferRequest, StoreError> {
    let (id, university_course, diploma_course, grade, submitted_date, status, evidence) = raw;

    let grade = Grade::from_label(&grade).ok_or_else(|| {
        StoreError::Unavailable(format!("request {id} carries unknown grade '{grade}'"))
    })?;
    let status = RequestStatus::from_label(&status).ok_or_else(|| {
        StoreError::Unavailable(format!("request {id} carries unknown status '{status}'"))
    })?;
    let submitted_date = NaiveDate::parse_from_str(&submitted_date, DATE_FORMAT).map_err(|err| {
        StoreError::Unavailable(format!("request {id} carries invalid date: {err}"))
    })?;

    Ok(TransferRequest {
        id: RequestId(id),
        university_course,
        diploma_course,
        grade,
        submitted_date,
        status,
        evidence_file_name: evidence,
    })
}

fn insert_request(conn: &Connection, request: &TransferRequest) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO requests (id, university_course, diploma_course, grade, submitted_date,
                               status, evidence_file_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            request.id.0,
            request.university_course,
            request.diploma_course,
            request.grade.label(),
            request.submitted_date.format(DATE_FORMAT).to_string(),
            request.status.label(),
            request.evidence_file_name,
        ],
    )
    .map(|_| ())
    .map_err(|err| match err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicateId(request.id.clone())
        }
        other => StoreError::Unavailable(format!("insert request: {other}")),
    })
}

fn storage_error(operation: &'static str) -> impl Fn(rusqlite::Error) -> StoreError {
    move |err| StoreError::Unavailable(format!("{operation}: {err}"))
}
