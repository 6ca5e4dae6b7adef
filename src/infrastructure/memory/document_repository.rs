//! In-memory document metadata store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Document, DocumentStatus};
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

pub struct MemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl MemoryDocumentRepository {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for MemoryDocumentRepository {
    async fn insert(&self, document: Document) -> Result<Document, AppError> {
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn find(&self, id: &str) -> Result<Option<Document>, AppError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: &str,
        status: DocumentStatus,
    ) -> Result<Option<Document>, AppError> {
        let mut documents = self.documents.write().await;
        Ok(documents.iter_mut().find(|d| d.id == id).map(|doc| {
            doc.status = status;
            doc.clone()
        }))
    }
}
