//! Stub report renderer.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::collaborators::ReportRenderer;
use crate::error::AppError;
use crate::utils::generate_id;

/// Fabricates an artifact path without rendering anything.
///
/// Rendering is delegated to an external service in production.
pub struct StubReportRenderer;

impl StubReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportRenderer for StubReportRenderer {
    async fn render(&self, report_type: &str, _data: &Value) -> Result<String, AppError> {
        Ok(format!(
            "/reports/{}_{}.pdf",
            report_type,
            generate_id("r")
        ))
    }
}
