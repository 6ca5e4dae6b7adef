//! Worker entity: a tradesperson profile with skills and certifications.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::job::Location;

/// Worker availability states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        }
    }
}

/// A professional certification held by a worker. Ordered list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: String,
}

impl Certification {
    /// Certification has passed its expiry date as of `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Certification expires within `days` of `today` (and is not yet expired).
    pub fn expires_within(&self, today: NaiveDate, days: i64) -> bool {
        !self.is_expired(today) && (self.expiry_date - today).num_days() <= days
    }
}

/// A worker profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub location: Location,
    pub availability: Availability,
    pub rating: f64,
    pub completed_jobs: u32,
    pub created_at: DateTime<Utc>,
}

impl Worker {
    /// True when ANY of the worker's skills contains ANY of the requested
    /// skill substrings (both sides lowercased).
    pub fn matches_skills(&self, requested: &[String]) -> bool {
        self.skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            requested.iter().any(|wanted| skill.contains(wanted))
        })
    }
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<Location>,
    pub availability: Option<Availability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(expiry: &str) -> Certification {
        Certification {
            name: "OSHA 30-Hour".to_string(),
            issue_date: "2023-03-20".parse().unwrap(),
            expiry_date: expiry.parse().unwrap(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_certification_expiry_window() {
        let today: NaiveDate = "2024-06-01".parse().unwrap();

        assert!(cert("2024-05-31").is_expired(today));
        assert!(!cert("2024-06-15").is_expired(today));
        assert!(cert("2024-06-15").expires_within(today, 30));
        assert!(!cert("2024-08-01").expires_within(today, 30));
        // Already expired is not "expiring".
        assert!(!cert("2024-05-31").expires_within(today, 30));
    }

    #[test]
    fn test_skills_match_any_substring() {
        let worker = Worker {
            id: "worker_001".to_string(),
            name: "John Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1-555-0123".to_string(),
            skills: vec!["Crane Operation".to_string(), "Heavy Equipment".to_string()],
            certifications: vec![],
            location: Location {
                address: None,
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                coordinates: None,
            },
            availability: Availability::Available,
            rating: 4.8,
            completed_jobs: 127,
            created_at: Utc::now(),
        };

        assert!(worker.matches_skills(&["crane".to_string()]));
        assert!(worker.matches_skills(&["welding".to_string(), "crane".to_string()]));
        assert!(!worker.matches_skills(&["welding".to_string()]));
    }

    #[test]
    fn test_certification_wire_format() {
        let c = cert("2026-03-20");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["issueDate"], "2023-03-20");
        assert_eq!(json["expiryDate"], "2026-03-20");
    }
}
