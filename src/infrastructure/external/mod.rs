//! Shipped implementations of the external collaborator traits.

pub mod compliance_engine;
pub mod credential_verifier;
pub mod payment_gateway;
pub mod report_renderer;

pub use compliance_engine::MockComplianceEngine;
pub use credential_verifier::StaticCredentialVerifier;
pub use payment_gateway::SandboxPaymentGateway;
pub use report_renderer::StubReportRenderer;
