//! Compliance check result structures.
//!
//! The check itself is performed by an external collaborator
//! ([`crate::domain::collaborators::ComplianceChecker`]); these types define
//! the result shape the API returns.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationCheck {
    pub status: String,
    pub expired_count: usize,
    pub expiring_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCheck {
    pub status: String,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundCheck {
    pub status: String,
    pub completed_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceChecks {
    pub certifications: CertificationCheck,
    pub insurance: InsuranceCheck,
    pub background_check: BackgroundCheck,
}

/// Full result of a worker compliance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub worker_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub compliance_status: ComplianceStatus,
    pub checked_at: DateTime<Utc>,
    pub results: ComplianceChecks,
}
