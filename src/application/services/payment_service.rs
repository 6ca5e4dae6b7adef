//! Payment processing through the gateway collaborator.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::collaborators::PaymentGateway;
use crate::domain::entities::{Payment, PaymentStatus};
use crate::domain::repositories::PaymentRepository;
use crate::error::AppError;
use crate::utils::generate_id;

pub struct PaymentService {
    repository: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(repository: Arc<dyn PaymentRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    /// Charges through the gateway and records the resulting payment.
    ///
    /// # Errors
    ///
    /// A gateway failure surfaces as [`AppError::Dependency`] with the raw
    /// gateway message attached for diagnostics.
    pub async fn process_payment(
        &self,
        booking_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<Payment, AppError> {
        let receipt = self
            .gateway
            .charge(booking_id, amount, currency)
            .await
            .map_err(|e| match e {
                classified @ AppError::Dependency { .. } => classified,
                other => AppError::dependency_with_detail(
                    "Payment processing failed",
                    other.to_string(),
                ),
            })?;

        let payment = Payment {
            id: generate_id("payment"),
            booking_id: booking_id.to_string(),
            amount,
            currency: currency.to_string(),
            status: PaymentStatus::Processed,
            transaction_id: receipt.transaction_id,
            processed_at: Utc::now(),
        };

        self.repository.insert(payment).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn get_payment(&self, id: &str) -> Result<Payment, AppError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collaborators::MockPaymentGateway;
    use crate::domain::collaborators::payment_gateway::ChargeReceipt;
    use crate::infrastructure::memory::MemoryPaymentRepository;

    #[tokio::test]
    async fn test_process_records_payment_with_receipt() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_charge()
            .withf(|booking_id, amount, currency| {
                booking_id == "booking_1" && *amount == 250.0 && currency == "USD"
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(ChargeReceipt {
                    transaction_id: "txn_42".to_string(),
                })
            });

        let svc = PaymentService::new(
            Arc::new(MemoryPaymentRepository::new()),
            Arc::new(gateway),
        );

        let payment = svc.process_payment("booking_1", 250.0, "USD").await.unwrap();

        assert_eq!(payment.transaction_id, "txn_42");
        assert_eq!(payment.status, PaymentStatus::Processed);

        let fetched = svc.get_payment(&payment.id).await.unwrap();
        assert_eq!(fetched.booking_id, "booking_1");
    }

    #[tokio::test]
    async fn test_gateway_failure_is_dependency_error() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_charge()
            .times(1)
            .returning(|_, _, _| Err(AppError::dependency("gateway unreachable")));

        let svc = PaymentService::new(
            Arc::new(MemoryPaymentRepository::new()),
            Arc::new(gateway),
        );

        let err = svc.process_payment("booking_1", 10.0, "USD").await.unwrap_err();
        assert!(matches!(err, AppError::Dependency { .. }));
    }

    #[tokio::test]
    async fn test_unknown_payment_is_not_found() {
        let svc = PaymentService::new(
            Arc::new(MemoryPaymentRepository::new()),
            Arc::new(MockPaymentGateway::new()),
        );

        let err = svc.get_payment("payment_404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
