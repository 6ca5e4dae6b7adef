//! Job endpoint request shapes.

use serde::Deserialize;
use validator::Validate;

use super::pagination::PageParams;
use crate::application::services::JobFilter;
use crate::domain::entities::{Compensation, JobStatus, Location, NewJob, Schedule};

#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    #[serde(flatten)]
    pub page: PageParams,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl JobListQuery {
    pub fn filter(&self) -> JobFilter {
        JobFilter {
            location: self.location.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub location: Location,
    pub compensation: Compensation,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl CreateJobRequest {
    pub fn into_new_job(self, client_id: Option<String>) -> NewJob {
        NewJob {
            title: self.title,
            description: self.description,
            location: self.location,
            requirements: self.requirements,
            compensation: self.compensation,
            schedule: self.schedule,
            client_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignWorkerRequest {
    #[validate(length(min = 1))]
    pub worker_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_unknown_status_strings() {
        let err = serde_json::from_str::<UpdateJobStatusRequest>(r#"{"status":"paused"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_create_request_defaults_optional_fields() {
        let req: CreateJobRequest = serde_json::from_value(serde_json::json!({
            "title": "Dogman",
            "description": "Load control",
            "location": {"city": "Seattle", "state": "WA"},
            "compensation": {"rate": 40.0, "type": "hourly"}
        }))
        .unwrap();

        assert!(req.requirements.is_empty());
        assert!(req.schedule.is_none());
        assert!(req.validate().is_ok());
    }
}
