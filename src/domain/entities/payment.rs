//! Payment entity: a processed marketplace payment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Processed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Gateway reference returned by the payment collaborator.
    pub transaction_id: String,
    pub processed_at: DateTime<Utc>,
}
