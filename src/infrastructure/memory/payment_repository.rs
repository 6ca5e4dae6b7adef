//! In-memory payment record store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Payment;
use crate::domain::repositories::PaymentRepository;
use crate::error::AppError;

pub struct MemoryPaymentRepository {
    payments: RwLock<Vec<Payment>>,
}

impl MemoryPaymentRepository {
    pub fn new() -> Self {
        Self {
            payments: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryPaymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn insert(&self, payment: Payment) -> Result<Payment, AppError> {
        self.payments.write().await.push(payment.clone());
        Ok(payment)
    }

    async fn find(&self, id: &str) -> Result<Option<Payment>, AppError> {
        Ok(self
            .payments
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}
