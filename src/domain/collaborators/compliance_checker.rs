//! Pluggable compliance evaluation.
//!
//! Real rule evaluation is an external system; the API treats it as an opaque
//! collaborator that takes a worker profile and produces a report.

use crate::domain::entities::{ComplianceReport, Worker};
use crate::error::AppError;
use async_trait::async_trait;

/// Runs a compliance check for a worker, optionally in the context of a job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplianceChecker: Send + Sync {
    async fn check<'a>(
        &self,
        worker: &Worker,
        job_id: Option<&'a str>,
    ) -> Result<ComplianceReport, AppError>;
}
