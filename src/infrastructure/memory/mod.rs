//! In-memory store implementations.
//!
//! Each wraps an ordered `Vec` in a `tokio::sync::RwLock` so concurrent
//! creates cannot corrupt the collection. These stand in for real persistence,
//! which is out of scope for this service.

pub mod booking_repository;
pub mod document_repository;
pub mod feedback_repository;
pub mod job_repository;
pub mod payment_repository;
pub mod report_repository;
pub mod seed;
pub mod worker_repository;

pub use booking_repository::MemoryBookingRepository;
pub use document_repository::MemoryDocumentRepository;
pub use feedback_repository::MemoryFeedbackRepository;
pub use job_repository::MemoryJobRepository;
pub use payment_repository::MemoryPaymentRepository;
pub use report_repository::MemoryReportRepository;
pub use worker_repository::MemoryWorkerRepository;
