//! Pluggable credential verification.
//!
//! The dispatch layer depends only on this abstract "verify credentials →
//! identity" capability, never on literal secrets. Real credential storage is
//! an external collaborator.

use crate::error::AppError;
use async_trait::async_trait;

/// An identity confirmed by a credential check.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Verifies an email/password pair against a credential store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `Ok(Some(identity))` when the credentials match, `Ok(None)` when they
    /// do not. Errors are reserved for verifier infrastructure failures.
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<VerifiedIdentity>, AppError>;
}
