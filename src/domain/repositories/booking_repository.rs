//! Repository trait for bookings.

use crate::domain::entities::{Booking, NewBooking};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a new booking, assigning `id`, `status`, and `created_at`.
    async fn insert(&self, new_booking: NewBooking) -> Result<Booking, AppError>;

    /// Lists every booking, in insertion order.
    async fn list(&self) -> Result<Vec<Booking>, AppError>;

    /// Flips a booking to cancelled. `Ok(None)` when the id is unknown.
    async fn cancel(&self, id: &str) -> Result<Option<Booking>, AppError>;
}
