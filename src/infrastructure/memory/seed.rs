//! Demonstration seed data.
//!
//! Two jobs and two workers, loaded into the in-memory stores at startup so
//! the API is explorable without any external persistence.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{
    Availability, Certification, Compensation, Job, JobStatus, Location, Schedule, Worker,
};

pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job_001".to_string(),
            title: "Tower Crane Operator".to_string(),
            description:
                "Experienced tower crane operator needed for high-rise construction project"
                    .to_string(),
            location: Location {
                address: Some("123 Construction Ave".to_string()),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                coordinates: Some([47.6062, -122.3321]),
            },
            requirements: vec![
                "Valid crane operator certification".to_string(),
                "5+ years experience".to_string(),
                "OSHA 10 certification".to_string(),
            ],
            compensation: Compensation {
                rate: 45.00,
                rate_type: "hourly".to_string(),
            },
            schedule: Some(Schedule {
                start: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap(),
            }),
            status: JobStatus::Active,
            client_id: None,
            assigned_worker_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        },
        Job {
            id: "job_002".to_string(),
            title: "Structural Steel Worker".to_string(),
            description: "Skilled structural steel worker for commercial building project"
                .to_string(),
            location: Location {
                address: Some("456 Steel St".to_string()),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                coordinates: Some([45.5152, -122.6784]),
            },
            requirements: vec![
                "Structural steel experience".to_string(),
                "Fall protection certification".to_string(),
                "Blueprint reading skills".to_string(),
            ],
            compensation: Compensation {
                rate: 38.50,
                rate_type: "hourly".to_string(),
            },
            schedule: Some(Schedule {
                start: Utc.with_ymd_and_hms(2024, 2, 1, 7, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 6, 30, 16, 0, 0).unwrap(),
            }),
            status: JobStatus::Active,
            client_id: None,
            assigned_worker_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
        },
    ]
}

pub fn seed_workers() -> Vec<Worker> {
    vec![
        Worker {
            id: "worker_001".to_string(),
            name: "John Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1-555-0123".to_string(),
            skills: vec![
                "Crane Operation".to_string(),
                "Heavy Equipment".to_string(),
                "Safety Management".to_string(),
            ],
            certifications: vec![
                Certification {
                    name: "NCCCO Mobile Crane Operator".to_string(),
                    issue_date: "2023-01-15".parse().unwrap(),
                    expiry_date: "2025-01-15".parse().unwrap(),
                    status: "active".to_string(),
                },
                Certification {
                    name: "OSHA 30-Hour".to_string(),
                    issue_date: "2023-03-20".parse().unwrap(),
                    expiry_date: "2026-03-20".parse().unwrap(),
                    status: "active".to_string(),
                },
            ],
            location: Location {
                address: None,
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                coordinates: Some([47.6062, -122.3321]),
            },
            availability: Availability::Available,
            rating: 4.8,
            completed_jobs: 127,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        },
        Worker {
            id: "worker_002".to_string(),
            name: "Maria Rodriguez".to_string(),
            email: "maria.rodriguez@email.com".to_string(),
            phone: "+1-555-0456".to_string(),
            skills: vec![
                "Structural Steel".to_string(),
                "Welding".to_string(),
                "Blueprint Reading".to_string(),
            ],
            certifications: vec![
                Certification {
                    name: "AWS Certified Welder".to_string(),
                    issue_date: "2022-09-10".parse().unwrap(),
                    expiry_date: "2024-09-10".parse().unwrap(),
                    status: "active".to_string(),
                },
                Certification {
                    name: "Fall Protection Certification".to_string(),
                    issue_date: "2023-06-15".parse().unwrap(),
                    expiry_date: "2025-06-15".parse().unwrap(),
                    status: "active".to_string(),
                },
            ],
            location: Location {
                address: None,
                city: "Portland".to_string(),
                state: "OR".to_string(),
                coordinates: Some([45.5152, -122.6784]),
            },
            availability: Availability::Available,
            rating: 4.9,
            completed_jobs: 89,
            created_at: Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap(),
        },
    ]
}
