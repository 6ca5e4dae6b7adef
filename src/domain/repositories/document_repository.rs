//! Repository trait for document metadata.

use crate::domain::entities::{Document, DocumentStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for uploaded document metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Records an uploaded document.
    async fn insert(&self, document: Document) -> Result<Document, AppError>;

    /// Finds a document by id. `Ok(None)` when unknown.
    async fn find(&self, id: &str) -> Result<Option<Document>, AppError>;

    /// Updates a document's status. `Ok(None)` when the id is unknown.
    async fn update_status(
        &self,
        id: &str,
        status: DocumentStatus,
    ) -> Result<Option<Document>, AppError>;
}
