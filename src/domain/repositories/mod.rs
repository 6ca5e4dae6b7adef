//! Store abstractions injected into services.

pub mod booking_repository;
pub mod document_repository;
pub mod feedback_repository;
pub mod job_repository;
pub mod payment_repository;
pub mod report_repository;
pub mod worker_repository;

pub use booking_repository::BookingRepository;
pub use document_repository::DocumentRepository;
pub use feedback_repository::FeedbackRepository;
pub use job_repository::JobRepository;
pub use payment_repository::PaymentRepository;
pub use report_repository::ReportRepository;
pub use worker_repository::WorkerRepository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use worker_repository::MockWorkerRepository;
