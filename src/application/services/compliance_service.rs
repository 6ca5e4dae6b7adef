//! Worker compliance checks through the checker collaborator.

use std::sync::Arc;

use crate::domain::collaborators::ComplianceChecker;
use crate::domain::entities::ComplianceReport;
use crate::domain::repositories::WorkerRepository;
use crate::error::AppError;

pub struct ComplianceService {
    workers: Arc<dyn WorkerRepository>,
    checker: Arc<dyn ComplianceChecker>,
}

impl ComplianceService {
    pub fn new(workers: Arc<dyn WorkerRepository>, checker: Arc<dyn ComplianceChecker>) -> Self {
        Self { workers, checker }
    }

    /// Runs a compliance check for a worker, optionally against a job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the worker is unknown; checker
    /// failures surface as [`AppError::Dependency`].
    pub async fn check_worker(
        &self,
        worker_id: &str,
        job_id: Option<&str>,
    ) -> Result<ComplianceReport, AppError> {
        let worker = self
            .workers
            .find(worker_id)
            .await?
            .ok_or_else(|| AppError::not_found("Worker not found"))?;

        self.checker.check(&worker, job_id).await.map_err(|e| match e {
            classified @ AppError::Dependency { .. } => classified,
            other => {
                AppError::dependency_with_detail("Compliance validation failed", other.to_string())
            }
        })
    }
}
