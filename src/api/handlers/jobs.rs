//! Handlers for job marketplace endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::jobs::{
    AssignWorkerRequest, CreateJobRequest, JobListQuery, UpdateJobStatusRequest,
};
use crate::api::dto::{ApiResponse, Page};
use crate::api::extract::{AppJson, AuthClaims};
use crate::domain::entities::Job;
use crate::error::AppError;
use crate::state::AppState;

/// Lists jobs with optional filtering and pagination.
///
/// # Endpoint
///
/// `GET /api/v1/jobs?location=&status=&page=&limit=`
///
/// Filters are conjunctive and applied before pagination: `location` is a
/// case-insensitive substring match on city or state, `status` an exact match
/// on the lowercase status name. An unrecognized status value matches no jobs
/// rather than failing the request.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<ApiResponse<Page<Job>>>, AppError> {
    let jobs = state.job_service.list_jobs(&query.filter()).await?;

    Ok(Json(ApiResponse::ok(Page::paginate(jobs, &query.page))))
}

/// Fetches a single job by id.
///
/// # Endpoint
///
/// `GET /api/v1/jobs/{id}`
///
/// # Errors
///
/// Returns 404 with `Job not found` for an unknown id.
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = state.job_service.get_job(&id).await?;

    Ok(Json(ApiResponse::ok(job)))
}

/// Creates a job posting owned by the authenticated client.
///
/// # Endpoint
///
/// `POST /api/v1/jobs` (requires bearer token)
pub async fn create_job_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    AppJson(payload): AppJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>), AppError> {
    payload.validate()?;

    let job = state
        .job_service
        .create_job(payload.into_new_job(Some(claims.sub)))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Job created successfully", job)),
    ))
}

/// Transitions a job to a new lifecycle status.
///
/// # Endpoint
///
/// `PATCH /api/v1/jobs/{job_id}/status` (requires bearer token)
///
/// An unknown status string is rejected as 400 before the job is looked up.
pub async fn update_job_status_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(job_id): Path<String>,
    AppJson(payload): AppJson<UpdateJobStatusRequest>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = state
        .job_service
        .update_status(&job_id, payload.status)
        .await?;

    Ok(Json(ApiResponse::with_message("Job status updated", job)))
}

/// Assigns a worker to a job.
///
/// # Endpoint
///
/// `POST /api/v1/jobs/{job_id}/assign` (requires bearer token)
pub async fn assign_worker_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(job_id): Path<String>,
    AppJson(payload): AppJson<AssignWorkerRequest>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    payload.validate()?;

    let job = state
        .job_service
        .assign_worker(&job_id, &payload.worker_id)
        .await?;

    Ok(Json(ApiResponse::with_message("Worker assigned", job)))
}
