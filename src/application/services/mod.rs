//! Application services orchestrating domain operations.

pub mod auth_service;
pub mod booking_service;
pub mod compliance_service;
pub mod document_service;
pub mod feedback_service;
pub mod job_service;
pub mod payment_service;
pub mod report_service;
pub mod worker_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use compliance_service::ComplianceService;
pub use document_service::DocumentService;
pub use feedback_service::FeedbackService;
pub use job_service::{JobFilter, JobService};
pub use payment_service::PaymentService;
pub use report_service::ReportService;
pub use worker_service::{WorkerFilter, WorkerService};
