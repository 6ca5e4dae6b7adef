//! Application error taxonomy and HTTP response mapping.
//!
//! Every handler returns `Result<_, AppError>` so each request produces exactly
//! one response, including on failure paths. Collaborator failures are
//! classified into one of the four variants at the service boundary; the raw
//! message of a [`AppError::Dependency`] error is surfaced for diagnostics
//! only and never drives control flow downstream.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error body shared by every non-2xx response:
/// `{ "success": false, "message": <string>, "error": <string>? }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Classified request-handling failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input. Detected before any collaborator call.
    #[error("{0}")]
    Validation(String),

    /// Lookup by identifier found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Missing, invalid, or expired credentials/token.
    #[error("{0}")]
    Unauthorized(String),

    /// A delegated collaborator failed. `detail` carries the raw failure
    /// message when no richer classification was available.
    #[error("{message}")]
    Dependency {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn dependency(message: impl Into<String>) -> Self {
        Self::Dependency {
            message: message.into(),
            detail: None,
        }
    }

    pub fn dependency_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Dependency {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Dependency { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, message = %self, "request failed");
        }

        let (message, error) = match self {
            AppError::Dependency { message, detail } => (message, detail),
            other => (other.to_string(), None),
        };

        let body = ErrorBody {
            success: false,
            message,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens `validator` field errors into a single 400 message.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();

        if fields.is_empty() {
            AppError::Validation("Missing required fields".to_string())
        } else {
            AppError::Validation(format!("Invalid or missing fields: {}", fields.join(", ")))
        }
    }
}
