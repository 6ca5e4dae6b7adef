//! Feedback entity: a rating left after a completed job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    /// 1 through 5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Input for submitting feedback.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub job_id: String,
    pub worker_id: Option<String>,
    pub rating: u8,
    pub comment: Option<String>,
}
