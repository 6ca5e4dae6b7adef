//! Pluggable report rendering.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Renders a report artifact and returns its path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, report_type: &str, data: &Value) -> Result<String, AppError>;
}
