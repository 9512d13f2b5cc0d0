//! Storage contract consumed by the engine.
//!
//! The engine owns all business rules; a store only persists and
//! retrieves. Failures surface as [`StorageError`] and are propagated
//! unchanged.

use async_trait::async_trait;
use engine_core::error::StorageError;
use uuid::Uuid;

use crate::models::{
    Company, CurrencyCode, Document, DocumentType, ExchangeRate, LineItem, Party, Subscription,
    UsageCounter,
};

#[async_trait]
pub trait Store: Send + Sync {
    // Companies

    async fn insert_company(&self, company: &Company) -> Result<(), StorageError>;

    async fn get_company(&self, company_id: Uuid) -> Result<Option<Company>, StorageError>;

    /// Persist the company's currency configuration.
    async fn update_company_currencies(
        &self,
        company_id: Uuid,
        base_currency: CurrencyCode,
        enabled_currencies: &[CurrencyCode],
    ) -> Result<(), StorageError>;

    /// Live count of companies owned by a user, for the quota guard.
    async fn count_companies(&self, owner_user_id: Uuid) -> Result<u64, StorageError>;

    // Parties (read-only collaborator)

    async fn get_party(
        &self,
        company_id: Uuid,
        party_id: Uuid,
    ) -> Result<Option<Party>, StorageError>;

    // Exchange rates

    async fn insert_exchange_rate(&self, rate: &ExchangeRate) -> Result<(), StorageError>;

    /// Every stored rate for a (company, quote currency) pair.
    async fn list_exchange_rates(
        &self,
        company_id: Uuid,
        quote_currency: CurrencyCode,
    ) -> Result<Vec<ExchangeRate>, StorageError>;

    // Documents

    async fn insert_document(&self, document: &Document) -> Result<(), StorageError>;

    async fn get_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Option<Document>, StorageError>;

    async fn update_document(&self, document: &Document) -> Result<(), StorageError>;

    /// Hard delete; line items cascade. Returns whether a row existed.
    async fn delete_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<bool, StorageError>;

    async fn list_documents(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<Document>, StorageError>;

    /// Every existing number for a company + type, for the sequencer.
    async fn list_document_numbers(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<String>, StorageError>;

    async fn count_documents(&self, company_id: Uuid) -> Result<u64, StorageError>;

    async fn count_documents_in_currency(
        &self,
        company_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<u64, StorageError>;

    // Line items

    async fn insert_line_items(&self, items: &[LineItem]) -> Result<(), StorageError>;

    async fn get_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Vec<LineItem>, StorageError>;

    async fn delete_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<u64, StorageError>;

    // Subscription and usage (subscription provider collaborator)

    async fn get_subscription(&self, user_id: Uuid) -> Result<Option<Subscription>, StorageError>;

    async fn get_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<Option<UsageCounter>, StorageError>;

    /// Monotonic increment of the monthly invoice counter.
    async fn increment_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<(), StorageError>;

    // Live headcounts for the quota guard

    async fn count_employees(&self, company_id: Uuid) -> Result<u64, StorageError>;

    async fn count_team_members(&self, company_id: Uuid) -> Result<u64, StorageError>;
}
