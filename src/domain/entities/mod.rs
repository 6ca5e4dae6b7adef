//! Core domain entities.

pub mod booking;
pub mod claims;
pub mod compliance;
pub mod document;
pub mod feedback;
pub mod job;
pub mod payment;
pub mod report;
pub mod worker;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use claims::{AuthUser, Claims};
pub use compliance::{
    BackgroundCheck, CertificationCheck, ComplianceChecks, ComplianceReport, ComplianceStatus,
    InsuranceCheck,
};
pub use document::{Document, DocumentStatus, DocumentValidation};
pub use feedback::{Feedback, NewFeedback};
pub use job::{Compensation, Job, JobStatus, Location, NewJob, Schedule};
pub use payment::{Payment, PaymentStatus};
pub use report::Report;
pub use worker::{Availability, Certification, Worker, WorkerPatch};
