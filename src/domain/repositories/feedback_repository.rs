//! Repository trait for feedback.

use crate::domain::entities::{Feedback, NewFeedback};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for submitted feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Inserts new feedback, assigning `id` and `submitted_at`.
    async fn insert(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError>;

    /// Lists every feedback entry, in insertion order.
    async fn list(&self) -> Result<Vec<Feedback>, AppError>;
}
