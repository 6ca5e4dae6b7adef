#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tokio::sync::mpsc;

use riggerconnect_api::api::routes::api_routes;
use riggerconnect_api::application::services::{
    AuthService, BookingService, ComplianceService, DocumentService, FeedbackService, JobService,
    PaymentService, ReportService, WorkerService,
};
use riggerconnect_api::domain::AutomationTask;
use riggerconnect_api::infrastructure::external::{
    MockComplianceEngine, SandboxPaymentGateway, StaticCredentialVerifier, StubReportRenderer,
};
use riggerconnect_api::infrastructure::memory::{
    MemoryBookingRepository, MemoryDocumentRepository, MemoryFeedbackRepository,
    MemoryJobRepository, MemoryPaymentRepository, MemoryReportRepository, MemoryWorkerRepository,
};
use riggerconnect_api::state::AppState;

pub const TEST_SECRET: &str = "test-jwt-secret";
pub const ADMIN_EMAIL: &str = "admin@riggerconnect.com";
pub const ADMIN_PASSWORD: &str = "test-password";

pub fn create_test_state() -> (AppState, mpsc::Receiver<AutomationTask>) {
    let job_repository = Arc::new(MemoryJobRepository::seeded());
    let worker_repository = Arc::new(MemoryWorkerRepository::seeded());

    let verifier = Arc::new(StaticCredentialVerifier::new(
        ADMIN_EMAIL.to_string(),
        ADMIN_PASSWORD.to_string(),
        "admin123".to_string(),
        "admin".to_string(),
    ));

    let (task_tx, task_rx) = mpsc::channel(16);

    let state = AppState {
        auth_service: Arc::new(AuthService::new(verifier, TEST_SECRET, 24)),
        job_service: Arc::new(JobService::new(job_repository.clone())),
        worker_service: Arc::new(WorkerService::new(
            worker_repository.clone(),
            job_repository,
        )),
        booking_service: Arc::new(BookingService::new(Arc::new(
            MemoryBookingRepository::new(),
        ))),
        payment_service: Arc::new(PaymentService::new(
            Arc::new(MemoryPaymentRepository::new()),
            Arc::new(SandboxPaymentGateway::new()),
        )),
        document_service: Arc::new(DocumentService::new(Arc::new(
            MemoryDocumentRepository::new(),
        ))),
        feedback_service: Arc::new(FeedbackService::new(Arc::new(
            MemoryFeedbackRepository::new(),
        ))),
        report_service: Arc::new(ReportService::new(
            Arc::new(MemoryReportRepository::new()),
            Arc::new(StubReportRenderer::new()),
        )),
        compliance_service: Arc::new(ComplianceService::new(
            worker_repository,
            Arc::new(MockComplianceEngine::new()),
        )),
        task_sender: task_tx,
    };

    (state, task_rx)
}

/// Full versioned API mounted the way the server mounts it.
pub fn test_server() -> (TestServer, mpsc::Receiver<AutomationTask>) {
    let (state, rx) = create_test_state();
    let app = Router::new().nest("/api/v1", api_routes()).with_state(state);
    (TestServer::new(app).unwrap(), rx)
}

/// Logs in with the built-in admin credential and returns the bearer token.
pub async fn login_token(server: &TestServer) -> String {
    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .await;

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}
