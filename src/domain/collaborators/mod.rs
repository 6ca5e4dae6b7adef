//! Traits for external collaborators the dispatch layer delegates to.
//!
//! Each corresponds to a subsystem whose real behavior lives outside this
//! repository (credential store, compliance engine, payment gateway, report
//! renderer). Shipped implementations are mocks under
//! [`crate::infrastructure::external`].

pub mod compliance_checker;
pub mod credential_verifier;
pub mod payment_gateway;
pub mod report_renderer;

pub use compliance_checker::ComplianceChecker;
pub use credential_verifier::{CredentialVerifier, VerifiedIdentity};
pub use payment_gateway::{ChargeReceipt, PaymentGateway};
pub use report_renderer::ReportRenderer;

#[cfg(test)]
pub use compliance_checker::MockComplianceChecker;
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
#[cfg(test)]
pub use report_renderer::MockReportRenderer;
