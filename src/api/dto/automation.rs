//! Automation endpoint request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ProcessTaskRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub task_type: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQueued {
    pub task_id: String,
}
