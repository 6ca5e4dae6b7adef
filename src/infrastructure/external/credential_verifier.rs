//! Configuration-backed credential verifier.

use async_trait::async_trait;

use crate::domain::collaborators::{CredentialVerifier, VerifiedIdentity};
use crate::error::AppError;

/// Verifies credentials against a single account supplied via configuration.
///
/// Stands in for a real credential store; the dispatch layer only sees the
/// [`CredentialVerifier`] trait, so swapping this out touches nothing else.
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    subject_id: String,
    role: String,
}

impl StaticCredentialVerifier {
    pub fn new(email: String, password: String, subject_id: String, role: String) -> Self {
        Self {
            email,
            password,
            subject_id,
            role,
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<VerifiedIdentity>, AppError> {
        if email == self.email && password == self.password {
            Ok(Some(VerifiedIdentity {
                id: self.subject_id.clone(),
                email: email.to_string(),
                role: self.role.clone(),
            }))
        } else {
            Ok(None)
        }
    }
}
