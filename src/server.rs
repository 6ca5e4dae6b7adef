//! HTTP server initialization and runtime setup.
//!
//! Wires stores, collaborators, and services together, spawns the automation
//! task worker, and runs the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use tokio::sync::mpsc;

use crate::application::services::{
    AuthService, BookingService, ComplianceService, DocumentService, FeedbackService, JobService,
    PaymentService, ReportService, WorkerService,
};
use crate::config::Config;
use crate::domain::task_worker::run_task_worker;
use crate::infrastructure::external::{
    MockComplianceEngine, SandboxPaymentGateway, StaticCredentialVerifier, StubReportRenderer,
};
use crate::infrastructure::memory::{
    MemoryBookingRepository, MemoryDocumentRepository, MemoryFeedbackRepository,
    MemoryJobRepository, MemoryPaymentRepository, MemoryReportRepository, MemoryWorkerRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Builds the shared application state from configuration.
///
/// Stores are seeded with the demo marketplace data; the automation task
/// worker is spawned on the current runtime.
pub fn build_state(config: &Config) -> AppState {
    let job_repository = Arc::new(MemoryJobRepository::seeded());
    let worker_repository = Arc::new(MemoryWorkerRepository::seeded());

    let verifier = Arc::new(StaticCredentialVerifier::new(
        config.admin_email.clone(),
        config.admin_password.clone(),
        "admin123".to_string(),
        "admin".to_string(),
    ));

    let (task_tx, task_rx) = mpsc::channel(config.task_queue_capacity);
    tokio::spawn(run_task_worker(task_rx));
    tracing::info!("Task worker started");

    AppState {
        auth_service: Arc::new(AuthService::new(
            verifier,
            &config.jwt_secret,
            config.token_ttl_hours,
        )),
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
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, binding fails, or the
/// server encounters a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state, Duration::from_secs(config.request_timeout_seconds));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
