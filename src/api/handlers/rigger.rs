//! Handlers for rigger profile endpoints.
//!
//! Rigger profiles are worker records viewed through the profile surface;
//! both route families share the same store.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::workers::UpdateProfileRequest;
use crate::api::dto::ApiResponse;
use crate::api::extract::AppJson;
use crate::domain::entities::Worker;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/v1/rigger/profile/{id}`
pub async fn rigger_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Worker>>, AppError> {
    let worker = state.worker_service.get_worker(&id).await?;

    Ok(Json(ApiResponse::ok(worker)))
}

/// Applies a partial profile update; absent fields are left unchanged.
///
/// # Endpoint
///
/// `PUT /api/v1/rigger/profile/{id}`
pub async fn update_rigger_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<Worker>>, AppError> {
    payload.validate()?;

    let worker = state
        .worker_service
        .update_profile(&id, payload.into_patch())
        .await?;

    Ok(Json(ApiResponse::with_message("Profile updated", worker)))
}
