//! Worker and rigger-profile endpoint request shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PageParams;
use crate::application::services::WorkerFilter;
use crate::domain::entities::{Availability, Certification, Location, WorkerPatch};

#[derive(Debug, Default, Deserialize)]
pub struct WorkerListQuery {
    #[serde(flatten)]
    pub page: PageParams,
    /// Comma-separated skill substrings, e.g. `skills=welding,crane`.
    pub skills: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
}

impl WorkerListQuery {
    pub fn filter(&self) -> WorkerFilter {
        WorkerFilter {
            skills: self.skills.clone(),
            location: self.location.clone(),
            availability: self.availability.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub availability: Availability,
}

/// Partial rigger profile update; absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<Location>,
    pub availability: Option<Availability>,
}

impl UpdateProfileRequest {
    pub fn into_patch(self) -> WorkerPatch {
        WorkerPatch {
            name: self.name,
            phone: self.phone,
            skills: self.skills,
            location: self.location,
            availability: self.availability,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationsResponse {
    pub worker_id: String,
    pub certifications: Vec<Certification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_fails_validation() {
        let req: UpdateProfileRequest = serde_json::from_value(serde_json::json!({
            "name": ""
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_absent_fields_become_none_in_patch() {
        let req: UpdateProfileRequest = serde_json::from_value(serde_json::json!({
            "phone": "+1-555-9999"
        }))
        .unwrap();
        let patch = req.into_patch();
        assert!(patch.name.is_none());
        assert_eq!(patch.phone.as_deref(), Some("+1-555-9999"));
        assert!(patch.availability.is_none());
    }
}
