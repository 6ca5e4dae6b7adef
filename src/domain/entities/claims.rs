//! Identity claims carried by issued tokens.

use serde::{Deserialize, Serialize};

/// JWT claim set: subject id, email, role, and expiry (seconds since epoch).
///
/// Extracted on protected routes via [`crate::api::extract::AuthClaims`] so
/// handlers that consult identity never parse the token themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
}

/// Public view of an authenticated user, returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}
