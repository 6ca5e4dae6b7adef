//! Handlers for identity issuance endpoints.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::Json;
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, LoginResponse, RefreshResponse, RegisterRequest, RegisterResponse,
};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies credentials and issues a signed token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Errors
///
/// Returns 400 with `Invalid credentials` when the pair is rejected. A
/// malformed email or empty password fails validation before credentials are
/// ever checked.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let (token, user) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        user,
    }))
}

/// Registers an account identity and issues its first token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let (token, user) = state.auth_service.register(&payload.email, &payload.role)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token,
            user,
        }),
    ))
}

/// Reissues a token with a fresh expiry from a still-valid one.
///
/// # Endpoint
///
/// `POST /api/v1/auth/refresh`
///
/// # Errors
///
/// Returns 401 when the `Authorization` header is missing or the presented
/// token is invalid or expired.
pub async fn refresh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Access token required"))?;

    let token = state.auth_service.refresh(token)?;

    Ok(Json(RefreshResponse {
        success: true,
        token,
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
