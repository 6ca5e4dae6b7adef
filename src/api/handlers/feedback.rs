//! Handlers for feedback endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::feedback::SubmitFeedbackRequest;
use crate::api::dto::{ApiResponse, Page, PageParams};
use crate::api::extract::AppJson;
use crate::domain::entities::Feedback;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `POST /api/v1/feedback/submit`
///
/// The rating must be 1 through 5; out-of-range values are rejected as 400.
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Feedback>>), AppError> {
    payload.validate()?;

    let feedback = state
        .feedback_service
        .submit_feedback(payload.into_new_feedback())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Feedback submitted successfully",
            feedback,
        )),
    ))
}

/// # Endpoint
///
/// `GET /api/v1/feedback/list?page=&limit=`
pub async fn list_feedback_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<Feedback>>>, AppError> {
    let feedback = state.feedback_service.list_feedback().await?;

    Ok(Json(ApiResponse::ok(Page::paginate(feedback, &params))))
}
