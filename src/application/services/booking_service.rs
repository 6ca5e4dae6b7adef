//! Booking lifecycle: create, list, cancel.

use std::sync::Arc;

use crate::domain::entities::{Booking, NewBooking};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;

pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        self.repository.insert(new_booking).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.repository.list().await
    }

    /// Flips a booking to cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn cancel_booking(&self, id: &str) -> Result<Booking, AppError> {
        self.repository
            .cancel(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }
}
