//! Request extractors with error responses in the standard envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use axum_auth::AuthBearer;
use serde::de::DeserializeOwned;

use crate::domain::entities::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections render as enveloped 400s instead of
/// axum's plain-text defaults.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(classify_rejection(rejection)),
        }
    }
}

fn classify_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        // Structurally valid JSON missing required fields or with wrong types.
        JsonRejection::JsonDataError(_) => AppError::bad_request("Missing required fields"),
        JsonRejection::JsonSyntaxError(_) => AppError::bad_request("Invalid JSON body"),
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("Expected application/json body")
        }
        _ => AppError::bad_request("Invalid request body"),
    }
}

/// Verified bearer identity for protected routes.
///
/// A missing `Authorization` header yields 401 "Access token required"; a
/// present but invalid or expired token yields 401 from token verification.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| AppError::unauthorized("Access token required"))?;

        let claims = state.auth_service.verify(&token)?;
        Ok(AuthClaims(claims))
    }
}
