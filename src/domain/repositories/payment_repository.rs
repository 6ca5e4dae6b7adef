//! Repository trait for payment records.

use crate::domain::entities::Payment;
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for processed payments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Records a processed payment.
    async fn insert(&self, payment: Payment) -> Result<Payment, AppError>;

    /// Finds a payment by id. `Ok(None)` when unknown.
    async fn find(&self, id: &str) -> Result<Option<Payment>, AppError>;
}
