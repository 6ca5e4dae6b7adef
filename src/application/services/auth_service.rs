//! Identity issuance: login, registration, and token refresh.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::collaborators::CredentialVerifier;
use crate::domain::entities::{AuthUser, Claims};
use crate::error::AppError;
use crate::utils::generate_id;

/// Issues and verifies signed, time-boxed identity tokens (HS256 JWT).
///
/// Credential checking is delegated to the injected [`CredentialVerifier`];
/// this service never sees stored secrets, only the verification outcome.
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl AuthService {
    /// # Arguments
    ///
    /// - `verifier` - credential verification collaborator
    /// - `secret` - HMAC signing secret, shared across issue/verify
    /// - `ttl_hours` - token lifetime; the default deployment uses 24
    pub fn new(verifier: Arc<dyn CredentialVerifier>, secret: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry; no clock leeway.
        validation.leeway = 0;

        Self {
            verifier,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl: Duration::hours(ttl_hours),
        }
    }

    /// Verifies credentials and issues a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`Invalid credentials`) when the
    /// verifier rejects the pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, AuthUser), AppError> {
        let identity = self
            .verifier
            .verify(email, password)
            .await?
            .ok_or_else(|| AppError::bad_request("Invalid credentials"))?;

        let user = AuthUser {
            id: identity.id,
            email: identity.email,
            role: identity.role,
        };
        let token = self.issue(&user)?;

        Ok((token, user))
    }

    /// Creates an account id and issues a token for it.
    ///
    /// Durable account creation belongs to the external credential store;
    /// here only the identity and token are produced.
    pub fn register(&self, email: &str, role: &str) -> Result<(String, AuthUser), AppError> {
        let user = AuthUser {
            id: generate_id("user"),
            email: email.to_string(),
            role: role.to_string(),
        };
        let token = self.issue(&user)?;

        Ok((token, user))
    }

    /// Reissues a token with the same claims and a fresh expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the presented token is
    /// tampered with or expired.
    pub fn refresh(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify(token)?;
        self.issue(&AuthUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }

    /// Decodes and verifies a token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))
    }

    fn issue(&self, user: &AuthUser) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::dependency_with_detail("Token issuance failed", e.to_string()))
    }
}
