//! In-memory booking store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Booking, BookingStatus, NewBooking};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;
use crate::utils::generate_id;

pub struct MemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn insert(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = Booking {
            id: generate_id("booking"),
            job_id: new_booking.job_id,
            worker_id: new_booking.worker_id,
            status: BookingStatus::Confirmed,
            notes: new_booking.notes,
            created_at: Utc::now(),
        };

        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn cancel(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.iter_mut().find(|b| b.id == id).map(|booking| {
            booking.status = BookingStatus::Cancelled;
            booking.clone()
        }))
    }
}
