//! Document Repository
//!
//! Metadata records for uploaded supporting documents. Status only moves
//! forward (`pending -> reviewed -> approved`) and only through an explicit
//! review action.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::{Document, DocumentCreate, DocumentReview, DocumentStatus};

const RESOURCE: &str = "document";

#[derive(Clone)]
pub struct DocumentRepository {
    store: Arc<PortalStore>,
}

impl DocumentRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all documents, newest first
    pub fn find_all(&self) -> Vec<Document> {
        let mut documents = self.store.documents.read().clone();
        documents.sort_by(|a, b| b.upload_date.cmp(&a.upload_date).then(b.id.cmp(&a.id)));
        documents
    }

    /// Find document by id
    pub fn find_by_id(&self, id: u64) -> Option<Document> {
        self.store
            .documents
            .read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Find all documents attached to one employee
    pub fn find_by_employee(&self, employee_id: u64) -> Vec<Document> {
        self.store
            .documents
            .read()
            .iter()
            .filter(|d| d.employee_id == employee_id)
            .cloned()
            .collect()
    }

    /// Record uploaded document metadata in `pending` state
    pub fn create(
        &self,
        data: DocumentCreate,
        uploaded_by: u64,
        upload_date: NaiveDate,
    ) -> RepoResult<Document> {
        let document = Document {
            id: self.store.next_id(RESOURCE),
            title: data.title,
            description: data.description,
            file_name: data.file_name,
            file_type: data.file_type,
            upload_date,
            uploaded_by,
            employee_id: data.employee_id,
            category: data.category,
            status: DocumentStatus::Pending,
            comments: None,
        };
        self.store.documents.write().push(document.clone());
        Ok(document)
    }

    /// Apply a review action, advancing the status
    pub fn review(&self, id: u64, review: DocumentReview) -> RepoResult<Document> {
        let mut documents = self.store.documents.write();
        let document = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Document {} not found", id)))?;

        if !document.status.can_advance_to(review.status) {
            return Err(RepoError::BusinessRule(format!(
                "Document {} cannot move from {} to {}",
                id, document.status, review.status
            )));
        }

        document.status = review.status;
        if let Some(comments) = review.comments {
            document.comments = Some(comments);
        }
        Ok(document.clone())
    }
}
