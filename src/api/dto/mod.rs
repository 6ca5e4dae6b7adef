//! Request/response data transfer objects.

pub mod auth;
pub mod automation;
pub mod bookings;
pub mod compliance;
pub mod documents;
pub mod envelope;
pub mod feedback;
pub mod health;
pub mod jobs;
pub mod pagination;
pub mod payments;
pub mod reports;
pub mod workers;

pub use envelope::ApiResponse;
pub use pagination::{Page, PageParams};
