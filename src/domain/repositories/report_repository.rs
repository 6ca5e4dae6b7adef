//! Repository trait for generated reports.

use crate::domain::entities::Report;
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for generated report references.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Records a generated report.
    async fn insert(&self, report: Report) -> Result<Report, AppError>;

    /// Lists every generated report, in insertion order.
    async fn list(&self) -> Result<Vec<Report>, AppError>;
}
