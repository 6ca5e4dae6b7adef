//! Booking endpoint request shapes.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewBooking;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1))]
    pub job_id: String,
    #[validate(length(min = 1))]
    pub worker_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_new_booking(self) -> NewBooking {
        NewBooking {
            job_id: self.job_id,
            worker_id: self.worker_id,
            notes: self.notes,
        }
    }
}
