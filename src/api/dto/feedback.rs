//! Feedback endpoint request shapes.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use validator::Validate;

use crate::domain::entities::NewFeedback;

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1))]
    pub job_id: String,
    #[serde(default)]
    pub worker_id: Option<String>,
    /// Accepts a JSON number or a numeric string; must be 1 through 5.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    pub fn into_new_feedback(self) -> NewFeedback {
        NewFeedback {
            job_id: self.job_id,
            worker_id: self.worker_id,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for (rating, ok) in [(0u8, false), (1, true), (5, true), (6, false)] {
            let req: SubmitFeedbackRequest = serde_json::from_value(serde_json::json!({
                "jobId": "job_001",
                "rating": rating
            }))
            .unwrap();
            assert_eq!(req.validate().is_ok(), ok, "rating {rating}");
        }
    }
}
