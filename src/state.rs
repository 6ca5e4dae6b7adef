//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{
    AuthService, BookingService, ComplianceService, DocumentService, FeedbackService, JobService,
    PaymentService, ReportService, WorkerService,
};
use crate::domain::AutomationTask;

/// Handle bundle cloned into every request.
///
/// Services are behind `Arc`, so cloning the state is cheap and all clones
/// observe the same stores.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub job_service: Arc<JobService>,
    pub worker_service: Arc<WorkerService>,
    pub booking_service: Arc<BookingService>,
    pub payment_service: Arc<PaymentService>,
    pub document_service: Arc<DocumentService>,
    pub feedback_service: Arc<FeedbackService>,
    pub report_service: Arc<ReportService>,
    pub compliance_service: Arc<ComplianceService>,
    /// Intake side of the automation task queue.
    pub task_sender: mpsc::Sender<AutomationTask>,
}
