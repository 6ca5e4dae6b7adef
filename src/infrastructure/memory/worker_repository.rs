//! In-memory worker store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Availability, Worker, WorkerPatch};
use crate::domain::repositories::WorkerRepository;
use crate::error::AppError;

use super::seed::seed_workers;

pub struct MemoryWorkerRepository {
    workers: RwLock<Vec<Worker>>,
}

impl MemoryWorkerRepository {
    pub fn new() -> Self {
        Self {
            workers: RwLock::new(Vec::new()),
        }
    }

    /// Store preloaded with the demonstration workers.
    pub fn seeded() -> Self {
        Self {
            workers: RwLock::new(seed_workers()),
        }
    }
}

impl Default for MemoryWorkerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkerRepository for MemoryWorkerRepository {
    async fn find(&self, id: &str) -> Result<Option<Worker>, AppError> {
        Ok(self
            .workers
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Worker>, AppError> {
        Ok(self.workers.read().await.clone())
    }

    async fn update_availability(
        &self,
        id: &str,
        availability: Availability,
    ) -> Result<Option<Worker>, AppError> {
        let mut workers = self.workers.write().await;
        Ok(workers.iter_mut().find(|w| w.id == id).map(|worker| {
            worker.availability = availability;
            worker.clone()
        }))
    }

    async fn update_profile(
        &self,
        id: &str,
        patch: WorkerPatch,
    ) -> Result<Option<Worker>, AppError> {
        let mut workers = self.workers.write().await;
        Ok(workers.iter_mut().find(|w| w.id == id).map(|worker| {
            if let Some(name) = patch.name {
                worker.name = name;
            }
            if let Some(phone) = patch.phone {
                worker.phone = phone;
            }
            if let Some(skills) = patch.skills {
                worker.skills = skills;
            }
            if let Some(location) = patch.location {
                worker.location = location;
            }
            if let Some(availability) = patch.availability {
                worker.availability = availability;
            }
            worker.clone()
        }))
    }
}
