//! Report generation through the renderer collaborator.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::collaborators::ReportRenderer;
use crate::domain::entities::Report;
use crate::domain::repositories::ReportRepository;
use crate::error::AppError;
use crate::utils::generate_id;

pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    renderer: Arc<dyn ReportRenderer>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Renders a report and records the artifact reference.
    pub async fn generate_report(
        &self,
        report_type: &str,
        data: &Value,
    ) -> Result<Report, AppError> {
        let report_path = self.renderer.render(report_type, data).await.map_err(|e| {
            AppError::dependency_with_detail("Report generation failed", e.to_string())
        })?;

        let report = Report {
            id: generate_id("report"),
            report_type: report_type.to_string(),
            report_path,
            generated_at: Utc::now(),
        };

        self.repository.insert(report).await
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, AppError> {
        self.repository.list().await
    }
}
