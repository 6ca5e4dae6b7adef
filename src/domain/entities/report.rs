//! Report entity: a generated report artifact reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub report_type: String,
    /// Location of the rendered artifact, as returned by the renderer.
    pub report_path: String,
    pub generated_at: DateTime<Utc>,
}
