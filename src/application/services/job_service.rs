//! Job listing, creation, and lifecycle transitions.

use std::sync::Arc;

use crate::domain::entities::{Job, JobStatus, NewJob};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;

/// Filter criteria for job listings. Filters are conjunctive.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    /// Case-insensitive substring over city or state.
    pub location: Option<String>,
    /// Exact status match against the lowercase wire name. An unrecognized
    /// value matches nothing rather than erroring.
    pub status: Option<String>,
}

pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// Lists jobs narrowed by `filter`. Filtering happens before any
    /// pagination the caller applies.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, AppError> {
        let mut jobs = self.repository.list().await?;

        if let Some(location) = &filter.location {
            jobs.retain(|job| job.location.matches(location));
        }
        if let Some(status) = &filter.status {
            jobs.retain(|job| job.status.as_str() == status);
        }

        Ok(jobs)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn get_job(&self, id: &str) -> Result<Job, AppError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }

    pub async fn create_job(&self, new_job: NewJob) -> Result<Job, AppError> {
        self.repository.insert(new_job).await
    }

    /// Transitions a job to `status`.
    pub async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<Job, AppError> {
        self.repository
            .update_status(job_id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }

    /// Records a worker assignment on a job.
    pub async fn assign_worker(&self, job_id: &str, worker_id: &str) -> Result<Job, AppError> {
        self.repository
            .assign_worker(job_id, worker_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}
