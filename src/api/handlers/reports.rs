//! Handlers for report endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::reports::GenerateReportRequest;
use crate::api::dto::{ApiResponse, Page, PageParams};
use crate::api::extract::AppJson;
use crate::domain::entities::Report;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a report through the renderer collaborator and records the
/// artifact reference.
///
/// # Endpoint
///
/// `POST /api/v1/reports/generate`
pub async fn generate_report_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateReportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Report>>), AppError> {
    payload.validate()?;

    let report = state
        .report_service
        .generate_report(&payload.report_type, &payload.data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Report generated successfully",
            report,
        )),
    ))
}

/// # Endpoint
///
/// `GET /api/v1/reports/fetch?page=&limit=`
pub async fn fetch_reports_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<Report>>>, AppError> {
    let reports = state.report_service.list_reports().await?;

    Ok(Json(ApiResponse::ok(Page::paginate(reports, &params))))
}
