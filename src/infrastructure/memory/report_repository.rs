//! In-memory report reference store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Report;
use crate::domain::repositories::ReportRepository;
use crate::error::AppError;

pub struct MemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportRepository {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportRepository for MemoryReportRepository {
    async fn insert(&self, report: Report) -> Result<Report, AppError> {
        self.reports.write().await.push(report.clone());
        Ok(report)
    }

    async fn list(&self) -> Result<Vec<Report>, AppError> {
        Ok(self.reports.read().await.clone())
    }
}
