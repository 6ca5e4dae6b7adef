//! Handler for the automation task intake endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tokio::sync::mpsc::error::TrySendError;
use validator::Validate;

use crate::api::dto::automation::{ProcessTaskRequest, TaskQueued};
use crate::api::dto::ApiResponse;
use crate::api::extract::AppJson;
use crate::domain::AutomationTask;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::generate_id;

/// Accepts an automation task and queues it for background processing.
///
/// # Endpoint
///
/// `POST /api/v1/automation/process`
///
/// The task is enqueued, not executed inline; the 202 acknowledges intake
/// only. Queue saturation is reported as 500 rather than blocking the
/// request.
pub async fn process_task_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProcessTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TaskQueued>>), AppError> {
    payload.validate()?;

    let task = AutomationTask::new(generate_id("task"), payload.task_type, payload.payload);
    let task_id = task.id.clone();

    state.task_sender.try_send(task).map_err(|e| match e {
        TrySendError::Full(_) => AppError::dependency("Task queue full"),
        TrySendError::Closed(_) => AppError::dependency("Task queue unavailable"),
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::with_message(
            format!("Task {task_id} queued"),
            TaskQueued { task_id },
        )),
    ))
}
