//! Document metadata lifecycle: upload record and validation.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::entities::{Document, DocumentStatus, DocumentValidation};
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;
use crate::utils::generate_id;

pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Records metadata for an uploaded document. Content storage is
    /// external; only the reference is kept here.
    pub async fn upload_document(
        &self,
        file_name: String,
        content_type: Option<String>,
        metadata: Option<Value>,
    ) -> Result<Document, AppError> {
        let document = Document {
            id: generate_id("doc"),
            file_name,
            content_type,
            metadata,
            status: DocumentStatus::Uploaded,
            uploaded_at: Utc::now(),
        };

        self.repository.insert(document).await
    }

    /// Validates a stored document and marks it validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn validate_document(&self, id: &str) -> Result<DocumentValidation, AppError> {
        let document = self
            .repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        self.repository
            .update_status(&document.id, DocumentStatus::Validated)
            .await?;

        Ok(DocumentValidation {
            document_id: document.id,
            valid: true,
            checked_at: Utc::now(),
        })
    }
}
