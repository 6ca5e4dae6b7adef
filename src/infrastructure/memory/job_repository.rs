//! In-memory job store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Job, JobStatus, NewJob};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;
use crate::utils::generate_id;

use super::seed::seed_jobs;

/// Jobs held in an ordered in-process collection.
///
/// The lock keeps concurrent creates from corrupting the collection under the
/// multi-threaded runtime.
pub struct MemoryJobRepository {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryJobRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
        }
    }

    /// Store preloaded with the demonstration jobs.
    pub fn seeded() -> Self {
        Self {
            jobs: RwLock::new(seed_jobs()),
        }
    }
}

impl Default for MemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn insert(&self, new_job: NewJob) -> Result<Job, AppError> {
        let job = Job {
            id: generate_id("job"),
            title: new_job.title,
            description: new_job.description,
            location: new_job.location,
            requirements: new_job.requirements,
            compensation: new_job.compensation,
            schedule: new_job.schedule,
            status: JobStatus::Open,
            client_id: new_job.client_id,
            assigned_worker_id: None,
            created_at: Utc::now(),
        };

        self.jobs.write().await.push(job.clone());
        Ok(job)
    }

    async fn find(&self, id: &str) -> Result<Option<Job>, AppError> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.jobs.read().await.clone())
    }

    async fn update_status(&self, id: &str, status: JobStatus) -> Result<Option<Job>, AppError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|j| j.id == id).map(|job| {
            job.status = status;
            job.clone()
        }))
    }

    async fn assign_worker(&self, id: &str, worker_id: &str) -> Result<Option<Job>, AppError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|j| j.id == id).map(|job| {
            job.assigned_worker_id = Some(worker_id.to_string());
            job.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Compensation, Location};

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            description: "desc".to_string(),
            location: Location {
                address: None,
                city: "Tacoma".to_string(),
                state: "WA".to_string(),
                coordinates: None,
            },
            requirements: vec![],
            compensation: Compensation {
                rate: 30.0,
                rate_type: "hourly".to_string(),
            },
            schedule: None,
            client_id: Some("user_1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_status_created_at() {
        let repo = MemoryJobRepository::new();

        let job = repo.insert(new_job("Rigger")).await.unwrap();

        assert!(job.id.starts_with("job_"));
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let repo = MemoryJobRepository::seeded();
        assert!(repo.find("job_999").await.unwrap().is_none());
        assert!(repo.find("job_001").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = MemoryJobRepository::seeded();

        let job = repo
            .update_status("job_001", JobStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(job.status, JobStatus::Completed);

        let missing = repo.update_status("nope", JobStatus::Cancelled).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_do_not_lose_jobs() {
        let repo = std::sync::Arc::new(MemoryJobRepository::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(new_job(&format!("Job {i}"))).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(repo.list().await.unwrap().len(), 32);
    }
}
