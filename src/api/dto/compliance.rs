//! Compliance endpoint request shapes.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateComplianceRequest {
    #[validate(length(min = 1))]
    pub worker_id: String,
    #[validate(length(min = 1))]
    pub job_id: String,
}
