//! Handler for the compliance validation endpoint.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::dto::compliance::ValidateComplianceRequest;
use crate::api::dto::ApiResponse;
use crate::api::extract::AppJson;
use crate::domain::entities::ComplianceReport;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a worker's compliance against a specific job.
///
/// # Endpoint
///
/// `POST /api/v1/compliance/validate`
///
/// # Errors
///
/// Returns 404 for an unknown worker; checker failures surface as 500
/// `Compliance validation failed`.
pub async fn validate_compliance_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ValidateComplianceRequest>,
) -> Result<Json<ApiResponse<ComplianceReport>>, AppError> {
    payload.validate()?;

    let report = state
        .compliance_service
        .check_worker(&payload.worker_id, Some(&payload.job_id))
        .await?;

    Ok(Json(ApiResponse::ok(report)))
}
