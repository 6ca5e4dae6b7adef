//! Handlers for worker directory endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::workers::{CertificationsResponse, UpdateAvailabilityRequest, WorkerListQuery};
use crate::api::dto::{ApiResponse, Page};
use crate::api::extract::AppJson;
use crate::domain::entities::{ComplianceReport, Job, Worker};
use crate::error::AppError;
use crate::state::AppState;

/// Lists workers with optional filtering and pagination.
///
/// # Endpoint
///
/// `GET /api/v1/workers?skills=&location=&availability=&page=&limit=`
///
/// `skills` is comma-separated; a worker matches when any of their skills
/// contains any requested substring. Filters are conjunctive and applied
/// before pagination.
pub async fn list_workers_handler(
    State(state): State<AppState>,
    Query(query): Query<WorkerListQuery>,
) -> Result<Json<ApiResponse<Page<Worker>>>, AppError> {
    let workers = state.worker_service.list_workers(&query.filter()).await?;

    Ok(Json(ApiResponse::ok(Page::paginate(workers, &query.page))))
}

/// # Endpoint
///
/// `GET /api/v1/workers/{id}`
pub async fn get_worker_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Worker>>, AppError> {
    let worker = state.worker_service.get_worker(&id).await?;

    Ok(Json(ApiResponse::ok(worker)))
}

/// Returns a worker's certifications in stored order.
///
/// # Endpoint
///
/// `GET /api/v1/workers/{id}/certifications`
pub async fn worker_certifications_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CertificationsResponse>>, AppError> {
    let worker = state.worker_service.get_worker(&id).await?;

    Ok(Json(ApiResponse::ok(CertificationsResponse {
        worker_id: worker.id,
        certifications: worker.certifications,
    })))
}

/// Runs a standalone compliance check for a worker.
///
/// # Endpoint
///
/// `POST /api/v1/workers/{id}/compliance-check`
pub async fn worker_compliance_check_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ComplianceReport>>, AppError> {
    let report = state.compliance_service.check_worker(&id, None).await?;

    Ok(Json(ApiResponse::ok(report)))
}

/// # Endpoint
///
/// `PUT /api/v1/workers/{worker_id}/availability`
pub async fn update_availability_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    AppJson(payload): AppJson<UpdateAvailabilityRequest>,
) -> Result<Json<ApiResponse<Worker>>, AppError> {
    let worker = state
        .worker_service
        .update_availability(&worker_id, payload.availability)
        .await?;

    Ok(Json(ApiResponse::with_message("Availability updated", worker)))
}

/// Accepts a job on behalf of a worker: the job is assigned to them and moves
/// to `active`.
///
/// # Endpoint
///
/// `POST /api/v1/workers/{worker_id}/jobs/{job_id}/accept`
///
/// # Errors
///
/// Returns 404 naming whichever of the worker or job is unknown; the worker
/// is checked first.
pub async fn accept_job_handler(
    State(state): State<AppState>,
    Path((worker_id, job_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = state.worker_service.accept_job(&worker_id, &job_id).await?;

    Ok(Json(ApiResponse::with_message("Job accepted", job)))
}
