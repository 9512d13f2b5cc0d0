//! Cached document list views, keyed by (company, document type).
//!
//! Every mutating engine operation invalidates the affected key.

use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Document, DocumentType};

#[derive(Default)]
pub struct ViewCache {
    entries: DashMap<(Uuid, DocumentType), Arc<Vec<Document>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, company_id: Uuid, doc_type: DocumentType) -> Option<Arc<Vec<Document>>> {
        self.entries
            .get(&(company_id, doc_type))
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn put(&self, company_id: Uuid, doc_type: DocumentType, documents: Vec<Document>) -> Arc<Vec<Document>> {
        let documents = Arc::new(documents);
        self.entries
            .insert((company_id, doc_type), Arc::clone(&documents));
        documents
    }

    pub fn invalidate(&self, company_id: Uuid, doc_type: DocumentType) {
        self.entries.remove(&(company_id, doc_type));
    }
}
