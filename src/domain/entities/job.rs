//! Job entity: a posted piece of work on the marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical job lifecycle states.
///
/// The wire format is lowercase. `"OPEN"` is accepted on input as a legacy
/// alias for [`JobStatus::Open`]; it is always re-serialized as `"open"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[serde(alias = "OPEN")]
    Open,
    Active,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Active => "active",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

/// Physical location of a job or worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}

impl Location {
    /// Case-insensitive substring match against city or state.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.city.to_lowercase().contains(&needle) || self.state.to_lowercase().contains(&needle)
    }
}

/// Pay terms for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub rate: f64,
    #[serde(rename = "type")]
    pub rate_type: String,
}

/// Planned working window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A job posting. Flat record; no invariants beyond presence are enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub compensation: Compensation,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_worker_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a job. `id`, `status`, and `created_at` are
/// system-assigned on insert.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub requirements: Vec<String>,
    pub compensation: Compensation,
    pub schedule: Option<Schedule>,
    pub client_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_status_accepts_legacy_open_alias() {
        let status: JobStatus = serde_json::from_str("\"OPEN\"").unwrap();
        assert_eq!(status, JobStatus::Open);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"open\"");
    }

    #[test]
    fn test_location_match_is_case_insensitive() {
        let loc = Location {
            address: None,
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            coordinates: None,
        };
        assert!(loc.matches("seattle"));
        assert!(loc.matches("wa"));
        assert!(!loc.matches("portland"));
    }

    #[test]
    fn test_job_serializes_camel_case() {
        let job = Job {
            id: "job_001".to_string(),
            title: "Tower Crane Operator".to_string(),
            description: "desc".to_string(),
            location: Location {
                address: Some("123 Construction Ave".to_string()),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                coordinates: Some([47.6062, -122.3321]),
            },
            requirements: vec![],
            compensation: Compensation {
                rate: 45.0,
                rate_type: "hourly".to_string(),
            },
            schedule: None,
            status: JobStatus::Active,
            client_id: None,
            assigned_worker_id: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&job).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["compensation"]["type"], "hourly");
        assert_eq!(json["status"], "active");
        assert!(json.get("clientId").is_none());
    }
}
