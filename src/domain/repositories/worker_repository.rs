//! Repository trait for worker profiles.

use crate::domain::entities::{Availability, Worker, WorkerPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for worker profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    /// Finds a worker by id. `Ok(None)` when unknown.
    async fn find(&self, id: &str) -> Result<Option<Worker>, AppError>;

    /// Lists every worker, in insertion order.
    async fn list(&self) -> Result<Vec<Worker>, AppError>;

    /// Sets a worker's availability. `Ok(None)` when the id is unknown.
    async fn update_availability(
        &self,
        id: &str,
        availability: Availability,
    ) -> Result<Option<Worker>, AppError>;

    /// Applies a partial profile update. `None` fields are unchanged.
    /// `Ok(None)` when the id is unknown.
    async fn update_profile(&self, id: &str, patch: WorkerPatch)
    -> Result<Option<Worker>, AppError>;
}
