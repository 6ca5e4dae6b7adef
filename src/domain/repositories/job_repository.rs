//! Repository trait for job storage.

use crate::domain::entities::{Job, JobStatus, NewJob};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for job postings.
///
/// Handlers and services never touch storage directly; they go through this
/// trait so the dispatch layer is testable without shared process state.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryJobRepository`] - seeded in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a new job, assigning `id`, `status`, and `created_at`.
    async fn insert(&self, new_job: NewJob) -> Result<Job, AppError>;

    /// Finds a job by id. `Ok(None)` when unknown.
    async fn find(&self, id: &str) -> Result<Option<Job>, AppError>;

    /// Lists every job, in insertion order.
    async fn list(&self) -> Result<Vec<Job>, AppError>;

    /// Sets the status of a job. `Ok(None)` when the id is unknown.
    async fn update_status(&self, id: &str, status: JobStatus) -> Result<Option<Job>, AppError>;

    /// Records a worker assignment on a job. `Ok(None)` when the id is unknown.
    async fn assign_worker(&self, id: &str, worker_id: &str) -> Result<Option<Job>, AppError>;
}
