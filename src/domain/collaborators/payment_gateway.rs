//! Pluggable payment processing.

use crate::error::AppError;
use async_trait::async_trait;

/// Result of a gateway charge.
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    /// Gateway-assigned transaction reference.
    pub transaction_id: String,
}

/// Charges a payment through an external gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        booking_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<ChargeReceipt, AppError>;
}
