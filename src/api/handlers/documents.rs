//! Handlers for document endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::documents::UploadDocumentRequest;
use crate::api::dto::ApiResponse;
use crate::api::extract::AppJson;
use crate::domain::entities::{Document, DocumentValidation};
use crate::error::AppError;
use crate::state::AppState;

/// Records document metadata; content storage is out of band.
///
/// # Endpoint
///
/// `POST /api/v1/documents/upload`
pub async fn upload_document_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UploadDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), AppError> {
    payload.validate()?;

    let document = state
        .document_service
        .upload_document(payload.file_name, payload.content_type, payload.metadata)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Document uploaded successfully",
            document,
        )),
    ))
}

/// Validates a stored document and marks it validated.
///
/// # Endpoint
///
/// `GET /api/v1/documents/validate/{id}`
pub async fn validate_document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DocumentValidation>>, AppError> {
    let validation = state.document_service.validate_document(&id).await?;

    Ok(Json(ApiResponse::ok(validation)))
}
