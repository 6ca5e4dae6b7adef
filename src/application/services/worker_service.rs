//! Worker profiles, availability, and job acceptance.

use std::sync::Arc;

use crate::domain::entities::{Availability, Job, JobStatus, Worker, WorkerPatch};
use crate::domain::repositories::{JobRepository, WorkerRepository};
use crate::error::AppError;

/// Filter criteria for worker listings. Filters are conjunctive.
#[derive(Debug, Default, Clone)]
pub struct WorkerFilter {
    /// Comma-separated skill substrings; a worker matches when ANY of their
    /// skills contains ANY requested substring (case-insensitive).
    pub skills: Option<String>,
    /// Case-insensitive substring over city or state.
    pub location: Option<String>,
    /// Exact availability match. An unrecognized value matches nothing.
    pub availability: Option<String>,
}

pub struct WorkerService {
    workers: Arc<dyn WorkerRepository>,
    jobs: Arc<dyn JobRepository>,
}

impl WorkerService {
    pub fn new(workers: Arc<dyn WorkerRepository>, jobs: Arc<dyn JobRepository>) -> Self {
        Self { workers, jobs }
    }

    pub async fn list_workers(&self, filter: &WorkerFilter) -> Result<Vec<Worker>, AppError> {
        let mut workers = self.workers.list().await?;

        if let Some(skills) = &filter.skills {
            let requested: Vec<String> = skills
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !requested.is_empty() {
                workers.retain(|w| w.matches_skills(&requested));
            }
        }
        if let Some(location) = &filter.location {
            workers.retain(|w| w.location.matches(location));
        }
        if let Some(availability) = &filter.availability {
            workers.retain(|w| w.availability.as_str() == availability);
        }

        Ok(workers)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn get_worker(&self, id: &str) -> Result<Worker, AppError> {
        self.workers
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Worker not found"))
    }

    pub async fn update_availability(
        &self,
        worker_id: &str,
        availability: Availability,
    ) -> Result<Worker, AppError> {
        self.workers
            .update_availability(worker_id, availability)
            .await?
            .ok_or_else(|| AppError::not_found("Worker not found"))
    }

    pub async fn update_profile(
        &self,
        worker_id: &str,
        patch: WorkerPatch,
    ) -> Result<Worker, AppError> {
        self.workers
            .update_profile(worker_id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Worker not found"))
    }

    /// Worker accepts a job: the job is assigned to them and becomes active.
    pub async fn accept_job(&self, worker_id: &str, job_id: &str) -> Result<Job, AppError> {
        // Both sides must exist before mutating anything.
        self.get_worker(worker_id).await?;
        self.jobs
            .assign_worker(job_id, worker_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        self.jobs
            .update_status(job_id, JobStatus::Active)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemoryJobRepository, MemoryWorkerRepository};

    fn service() -> WorkerService {
        WorkerService::new(
            Arc::new(MemoryWorkerRepository::seeded()),
            Arc::new(MemoryJobRepository::seeded()),
        )
    }

    #[tokio::test]
    async fn test_skills_filter_matches_any_substring() {
        // "welding" matches Maria; "crane" matches John's "Crane Operation".
        let filter = WorkerFilter {
            skills: Some("welding,crane".to_string()),
            ..WorkerFilter::default()
        };
        let workers = service().list_workers(&filter).await.unwrap();
        assert_eq!(workers.len(), 2);
    }

    #[tokio::test]
    async fn test_skills_filter_narrows_to_single_match() {
        let filter = WorkerFilter {
            skills: Some(" Welding ".to_string()),
            ..WorkerFilter::default()
        };
        let workers = service().list_workers(&filter).await.unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].id, "worker_002");
    }

    #[tokio::test]
    async fn test_location_and_availability_are_conjunctive() {
        let filter = WorkerFilter {
            location: Some("portland".to_string()),
            availability: Some("available".to_string()),
            ..WorkerFilter::default()
        };
        let workers = service().list_workers(&filter).await.unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].id, "worker_002");
    }

    #[tokio::test]
    async fn test_get_unknown_worker_is_not_found() {
        let err = service().get_worker("worker_404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_accept_job_assigns_and_activates() {
        let job = service().accept_job("worker_001", "job_002").await.unwrap();

        assert_eq!(job.assigned_worker_id.as_deref(), Some("worker_001"));
        assert_eq!(job.status, JobStatus::Active);
    }

    #[tokio::test]
    async fn test_accept_job_requires_existing_worker() {
        let err = service()
            .accept_job("worker_404", "job_001")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Worker not found");
    }

    #[tokio::test]
    async fn test_accept_job_requires_existing_job() {
        let err = service()
            .accept_job("worker_001", "job_404")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Job not found");
    }
}
