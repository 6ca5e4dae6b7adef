//! Handler for health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::JobFilter;
use crate::state::AppState;

/// Returns service health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let queue_check = check_task_queue(&state);

    let all_healthy = store_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            task_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the job store with an unfiltered list.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.job_service.list_jobs(&JobFilter::default()).await {
        Ok(jobs) => CheckStatus {
            status: "ok".to_string(),
            message: format!("{} jobs stored", jobs.len()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: e.to_string(),
        },
    }
}

/// Checks the automation task channel is open and reports remaining capacity.
fn check_task_queue(state: &AppState) -> CheckStatus {
    if state.task_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: "Task worker stopped".to_string(),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: format!("Capacity: {}", state.task_sender.capacity()),
        }
    }
}
