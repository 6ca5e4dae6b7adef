//! In-memory feedback store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;
use crate::utils::generate_id;

pub struct MemoryFeedbackRepository {
    entries: RwLock<Vec<Feedback>>,
}

impl MemoryFeedbackRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryFeedbackRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepository {
    async fn insert(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError> {
        let feedback = Feedback {
            id: generate_id("feedback"),
            job_id: new_feedback.job_id,
            worker_id: new_feedback.worker_id,
            rating: new_feedback.rating,
            comment: new_feedback.comment,
            submitted_at: Utc::now(),
        };

        self.entries.write().await.push(feedback.clone());
        Ok(feedback)
    }

    async fn list(&self) -> Result<Vec<Feedback>, AppError> {
        Ok(self.entries.read().await.clone())
    }
}
