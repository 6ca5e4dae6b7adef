//! API route configuration.
//!
//! Job mutations require bearer authentication, enforced per handler via
//! [`crate::api::extract::AuthClaims`]; the remaining endpoints are public.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::api::handlers::{
    accept_job_handler, assign_worker_handler, cancel_booking_handler, create_booking_handler,
    create_job_handler, fetch_reports_handler, generate_report_handler, get_job_handler,
    get_worker_handler, list_bookings_handler, list_feedback_handler, list_jobs_handler,
    list_workers_handler, login_handler, payment_details_handler, process_payment_handler,
    process_task_handler, refresh_handler, register_handler, rigger_profile_handler,
    submit_feedback_handler, update_availability_handler, update_job_status_handler,
    update_rigger_profile_handler, upload_document_handler, validate_compliance_handler,
    validate_document_handler, worker_certifications_handler, worker_compliance_check_handler,
};
use crate::state::AppState;

/// All versioned API routes.
///
/// # Endpoints
///
/// - `POST  /auth/login`                                - Issue a token for valid credentials
/// - `POST  /auth/register`                             - Register an identity, issue first token
/// - `POST  /auth/refresh`                              - Reissue a still-valid token
/// - `GET   /jobs`                                      - List jobs (filter + paginate)
/// - `POST  /jobs`                                      - Create a job (auth)
/// - `GET   /jobs/{id}`                                 - Fetch a job
/// - `PATCH /jobs/{job_id}/status`                      - Update job status (auth)
/// - `POST  /jobs/{job_id}/assign`                      - Assign a worker (auth)
/// - `GET   /workers`                                   - List workers (filter + paginate)
/// - `GET   /workers/{id}`                              - Fetch a worker
/// - `GET   /workers/{id}/certifications`               - Worker certifications
/// - `POST  /workers/{id}/compliance-check`             - Standalone compliance check
/// - `PUT   /workers/{worker_id}/availability`          - Update availability
/// - `POST  /workers/{worker_id}/jobs/{job_id}/accept`  - Accept a job
/// - `POST  /bookings/create`                           - Create a booking
/// - `GET   /bookings/list`                             - List bookings (paginated)
/// - `PUT   /bookings/cancel/{id}`                      - Cancel a booking
/// - `POST  /payments/process`                          - Charge and record a payment
/// - `GET   /payments/details/{id}`                     - Fetch a payment
/// - `POST  /documents/upload`                          - Record document metadata
/// - `GET   /documents/validate/{id}`                   - Validate a document
/// - `POST  /feedback/submit`                           - Submit feedback
/// - `GET   /feedback/list`                             - List feedback (paginated)
/// - `POST  /reports/generate`                          - Generate a report
/// - `GET   /reports/fetch`                             - List reports (paginated)
/// - `GET   /rigger/profile/{id}`                       - Fetch a rigger profile
/// - `PUT   /rigger/profile/{id}`                       - Update a rigger profile
/// - `POST  /automation/process`                        - Queue an automation task
/// - `POST  /compliance/validate`                       - Validate worker/job compliance
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route("/jobs", get(list_jobs_handler).post(create_job_handler))
        .route("/jobs/{id}", get(get_job_handler))
        .route("/jobs/{job_id}/status", patch(update_job_status_handler))
        .route("/jobs/{job_id}/assign", post(assign_worker_handler))
        .route("/workers", get(list_workers_handler))
        .route("/workers/{id}", get(get_worker_handler))
        .route(
            "/workers/{id}/certifications",
            get(worker_certifications_handler),
        )
        .route(
            "/workers/{id}/compliance-check",
            post(worker_compliance_check_handler),
        )
        .route(
            "/workers/{worker_id}/availability",
            put(update_availability_handler),
        )
        .route(
            "/workers/{worker_id}/jobs/{job_id}/accept",
            post(accept_job_handler),
        )
        .route("/bookings/create", post(create_booking_handler))
        .route("/bookings/list", get(list_bookings_handler))
        .route("/bookings/cancel/{id}", put(cancel_booking_handler))
        .route("/payments/process", post(process_payment_handler))
        .route("/payments/details/{id}", get(payment_details_handler))
        .route("/documents/upload", post(upload_document_handler))
        .route("/documents/validate/{id}", get(validate_document_handler))
        .route("/feedback/submit", post(submit_feedback_handler))
        .route("/feedback/list", get(list_feedback_handler))
        .route("/reports/generate", post(generate_report_handler))
        .route("/reports/fetch", get(fetch_reports_handler))
        .route(
            "/rigger/profile/{id}",
            get(rigger_profile_handler).put(update_rigger_profile_handler),
        )
        .route("/automation/process", post(process_task_handler))
        .route("/compliance/validate", post(validate_compliance_handler))
}
