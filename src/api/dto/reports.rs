//! Report endpoint request shapes.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

fn default_data() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[validate(length(min = 1))]
    pub report_type: String,
    /// Free-form parameters forwarded to the renderer.
    #[serde(default = "default_data")]
    pub data: Value,
}
