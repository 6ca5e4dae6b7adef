//! Feedback submission and listing.

use std::sync::Arc;

use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit_feedback(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError> {
        self.repository.insert(new_feedback).await
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        self.repository.list().await
    }
}
