//! Sandbox payment gateway.

use async_trait::async_trait;

use crate::domain::collaborators::{ChargeReceipt, PaymentGateway};
use crate::error::AppError;
use crate::utils::generate_id;

/// Approves every charge and fabricates a transaction reference.
///
/// Real gateway integration is an external concern; handlers only see the
/// [`PaymentGateway`] trait.
pub struct SandboxPaymentGateway;

impl SandboxPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SandboxPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SandboxPaymentGateway {
    async fn charge(
        &self,
        booking_id: &str,
        amount: f64,
        _currency: &str,
    ) -> Result<ChargeReceipt, AppError> {
        tracing::debug!(booking_id, amount, "sandbox gateway approving charge");
        Ok(ChargeReceipt {
            transaction_id: generate_id("txn"),
        })
    }
}
