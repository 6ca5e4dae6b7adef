//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod automation;
pub mod bookings;
pub mod compliance;
pub mod documents;
pub mod feedback;
pub mod health;
pub mod jobs;
pub mod payments;
pub mod reports;
pub mod rigger;
pub mod workers;

pub use auth::{login_handler, refresh_handler, register_handler};
pub use automation::process_task_handler;
pub use bookings::{cancel_booking_handler, create_booking_handler, list_bookings_handler};
pub use compliance::validate_compliance_handler;
pub use documents::{upload_document_handler, validate_document_handler};
pub use feedback::{list_feedback_handler, submit_feedback_handler};
pub use health::health_handler;
pub use jobs::{
    assign_worker_handler, create_job_handler, get_job_handler, list_jobs_handler,
    update_job_status_handler,
};
pub use payments::{payment_details_handler, process_payment_handler};
pub use reports::{fetch_reports_handler, generate_report_handler};
pub use rigger::{rigger_profile_handler, update_rigger_profile_handler};
pub use workers::{
    accept_job_handler, get_worker_handler, list_workers_handler, update_availability_handler,
    worker_certifications_handler, worker_compliance_check_handler,
};
