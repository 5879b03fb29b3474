use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Decision, RequestId, RequestSubmission};
use super::service::{TransferRequestService, TransferServiceError};
use super::store::{RequestStore, StoreError};
use super::views::RequestView;

/// Router builder exposing HTTP endpoints for submission, review, and the
/// two role views.
pub fn transfer_router<R>(service: Arc<TransferRequestService<R>>) -> Router
where
    R: RequestStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/transfers",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .route(
            "/api/v1/transfers/views/student",
            get(student_view_handler::<R>),
        )
        .route(
            "/api/v1/transfers/views/admin",
            get(admin_view_handler::<R>),
        )
        .route("/api/v1/transfers/:request_id", get(get_handler::<R>))
        .route(
            "/api/v1/transfers/:request_id/decision",
            post(decide_handler::<R>),
        )
        .with_state(service)
}

/// Body for the admin review endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DecisionRequest {
    pub(crate) decision: Decision,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
    axum::Json(submission): axum::Json<RequestSubmission>,
) -> Response
where
    R: RequestStore + 'static,
{
    match service.submit(submission) {
        Ok(request) => {
            let view = RequestView::from_request(&request);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(TransferServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(TransferServiceError::Store(StoreError::DuplicateId(id))) => {
            let payload = json!({
                "error": format!("request {id} already exists, resubmit to draw a fresh id"),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
) -> Response
where
    R: RequestStore + 'static,
{
    match service.list() {
        Ok(requests) => {
            let views: Vec<RequestView> = requests.iter().map(RequestView::from_request).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: RequestStore + 'static,
{
    let id = RequestId(request_id);
    match service.get(&id) {
        Ok(request) => {
            let view = RequestView::from_request(&request);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(TransferServiceError::Store(StoreError::NotFound(id))) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn decide_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
    Path(request_id): Path<String>,
    axum::Json(body): axum::Json<DecisionRequest>,
) -> Response
where
    R: RequestStore + 'static,
{
    let id = RequestId(request_id);
    match service.decide(&id, body.decision) {
        Ok(request) => {
            let view = RequestView::from_request(&request);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(TransferServiceError::Store(StoreError::NotFound(id))) => not_found(&id),
        Err(error @ TransferServiceError::AlreadyDecided { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn student_view_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
) -> Response
where
    R: RequestStore + 'static,
{
    match service.student_dashboard() {
        Ok(dashboard) => (StatusCode::OK, axum::Json(dashboard)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn admin_view_handler<R>(
    State(service): State<Arc<TransferRequestService<R>>>,
) -> Response
where
    R: RequestStore + 'static,
{
    match service.admin_dashboard() {
        Ok(dashboard) => (StatusCode::OK, axum::Json(dashboard)).into_response(),
        Err(error) => internal_error(error),
    }
}

fn not_found(id: &RequestId) -> Response {
    let payload = json!({
        "error": format!("request {id} not found"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: TransferServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
