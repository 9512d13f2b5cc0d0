//! In-memory store.
//!
//! Backs the integration tests and doubles as a reference
//! implementation of the [`Store`] contract. Supports injecting
//! one-shot failures to exercise the engine's rollback paths.

use async_trait::async_trait;
use engine_core::error::StorageError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Company, CurrencyCode, Document, DocumentType, ExchangeRate, LineItem, Party, Subscription,
    UsageCounter,
};
use crate::services::store::Store;

#[derive(Default)]
struct State {
    companies: HashMap<Uuid, Company>,
    parties: HashMap<(Uuid, Uuid), Party>,
    rates: Vec<ExchangeRate>,
    documents: HashMap<Uuid, Document>,
    line_items: HashMap<Uuid, Vec<LineItem>>,
    subscriptions: HashMap<Uuid, Subscription>,
    usage: HashMap<(Uuid, Uuid, String), i64>,
    employee_counts: HashMap<Uuid, u64>,
    team_member_counts: HashMap<Uuid, u64>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
    fail_next_line_item_insert: AtomicBool,
    fail_next_usage_increment: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Seeding helpers for tests and demos.

    pub fn insert_party(&self, party: Party) {
        let mut state = self.state.write().unwrap();
        state
            .parties
            .insert((party.company_id, party.party_id), party);
    }

    pub fn insert_subscription(&self, subscription: Subscription) {
        let mut state = self.state.write().unwrap();
        state
            .subscriptions
            .insert(subscription.user_id, subscription);
    }

    pub fn set_usage(&self, user_id: Uuid, company_id: Uuid, month: &str, invoices_created: i64) {
        let mut state = self.state.write().unwrap();
        state
            .usage
            .insert((user_id, company_id, month.to_string()), invoices_created);
    }

    pub fn set_employee_count(&self, company_id: Uuid, count: u64) {
        let mut state = self.state.write().unwrap();
        state.employee_counts.insert(company_id, count);
    }

    pub fn set_team_member_count(&self, company_id: Uuid, count: u64) {
        let mut state = self.state.write().unwrap();
        state.team_member_counts.insert(company_id, count);
    }

    /// Make the next line-item insert fail, once.
    pub fn fail_next_line_item_insert(&self) {
        self.fail_next_line_item_insert.store(true, Ordering::SeqCst);
    }

    /// Make the next usage increment fail, once.
    pub fn fail_next_usage_increment(&self) {
        self.fail_next_usage_increment.store(true, Ordering::SeqCst);
    }

    pub fn document_count(&self) -> usize {
        self.state.read().unwrap().documents.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_company(&self, company: &Company) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        state.companies.insert(company.company_id, company.clone());
        Ok(())
    }

    async fn get_company(&self, company_id: Uuid) -> Result<Option<Company>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state.companies.get(&company_id).cloned())
    }

    async fn update_company_currencies(
        &self,
        company_id: Uuid,
        base_currency: CurrencyCode,
        enabled_currencies: &[CurrencyCode],
    ) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        let company = state
            .companies
            .get_mut(&company_id)
            .ok_or(StorageError::NotFound)?;
        company.base_currency = base_currency;
        company.enabled_currencies = enabled_currencies.to_vec();
        Ok(())
    }

    async fn count_companies(&self, owner_user_id: Uuid) -> Result<u64, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .companies
            .values()
            .filter(|c| c.owner_user_id == owner_user_id)
            .count() as u64)
    }

    async fn get_party(
        &self,
        company_id: Uuid,
        party_id: Uuid,
    ) -> Result<Option<Party>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state.parties.get(&(company_id, party_id)).cloned())
    }

    async fn insert_exchange_rate(&self, rate: &ExchangeRate) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        state.rates.push(rate.clone());
        Ok(())
    }

    async fn list_exchange_rates(
        &self,
        company_id: Uuid,
        quote_currency: CurrencyCode,
    ) -> Result<Vec<ExchangeRate>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .rates
            .iter()
            .filter(|r| r.company_id == company_id && r.quote_currency == quote_currency)
            .cloned()
            .collect())
    }

    async fn insert_document(&self, document: &Document) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        let duplicate = state.documents.values().any(|d| {
            d.company_id == document.company_id
                && d.doc_type == document.doc_type
                && d.number == document.number
        });
        if duplicate {
            return Err(StorageError::Conflict(format!(
                "document number '{}' already exists",
                document.number
            )));
        }
        state
            .documents
            .insert(document.document_id, document.clone());
        Ok(())
    }

    async fn get_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Option<Document>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .documents
            .get(&document_id)
            .filter(|d| d.company_id == company_id)
            .cloned())
    }

    async fn update_document(&self, document: &Document) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        if !state.documents.contains_key(&document.document_id) {
            return Err(StorageError::NotFound);
        }
        state
            .documents
            .insert(document.document_id, document.clone());
        Ok(())
    }

    async fn delete_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<bool, StorageError> {
        let mut state = self.state.write().unwrap();
        let existed = state
            .documents
            .get(&document_id)
            .is_some_and(|d| d.company_id == company_id);
        if existed {
            state.documents.remove(&document_id);
            state.line_items.remove(&document_id);
        }
        Ok(existed)
    }

    async fn list_documents(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<Document>, StorageError> {
        let state = self.state.read().unwrap();
        let mut documents: Vec<Document> = state
            .documents
            .values()
            .filter(|d| d.company_id == company_id && d.doc_type == doc_type)
            .cloned()
            .collect();
        documents.sort_by(|a, b| a.created_utc.cmp(&b.created_utc));
        Ok(documents)
    }

    async fn list_document_numbers(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<String>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .documents
            .values()
            .filter(|d| d.company_id == company_id && d.doc_type == doc_type)
            .map(|d| d.number.clone())
            .collect())
    }

    async fn count_documents(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .documents
            .values()
            .filter(|d| d.company_id == company_id)
            .count() as u64)
    }

    async fn count_documents_in_currency(
        &self,
        company_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<u64, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .documents
            .values()
            .filter(|d| d.company_id == company_id && d.currency == currency)
            .count() as u64)
    }

    async fn insert_line_items(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if self.fail_next_line_item_insert.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Database(anyhow::anyhow!(
                "injected line item insert failure"
            )));
        }
        let mut state = self.state.write().unwrap();
        for item in items {
            state
                .line_items
                .entry(item.document_id)
                .or_default()
                .push(item.clone());
        }
        Ok(())
    }

    async fn get_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Vec<LineItem>, StorageError> {
        let state = self.state.read().unwrap();
        let mut items: Vec<LineItem> = state
            .line_items
            .get(&document_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|i| i.company_id == company_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        items.sort_by_key(|i| i.sort_order);
        Ok(items)
    }

    async fn delete_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<u64, StorageError> {
        let mut state = self.state.write().unwrap();
        let Some(items) = state.line_items.get_mut(&document_id) else {
            return Ok(0);
        };
        let before = items.len();
        items.retain(|i| i.company_id != company_id);
        let removed = (before - items.len()) as u64;
        let now_empty = items.is_empty();
        if now_empty {
            state.line_items.remove(&document_id);
        }
        Ok(removed)
    }

    async fn get_subscription(&self, user_id: Uuid) -> Result<Option<Subscription>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state.subscriptions.get(&user_id).cloned())
    }

    async fn get_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<Option<UsageCounter>, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .usage
            .get(&(user_id, company_id, month.to_string()))
            .map(|count| UsageCounter {
                user_id,
                company_id,
                month: month.to_string(),
                invoices_created: *count,
            }))
    }

    async fn increment_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<(), StorageError> {
        if self.fail_next_usage_increment.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Database(anyhow::anyhow!(
                "injected usage increment failure"
            )));
        }
        let mut state = self.state.write().unwrap();
        *state
            .usage
            .entry((user_id, company_id, month.to_string()))
            .or_insert(0) += 1;
        Ok(())
    }

    async fn count_employees(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state.employee_counts.get(&company_id).copied().unwrap_or(0))
    }

    async fn count_team_members(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let state = self.state.read().unwrap();
        Ok(state
            .team_member_counts
            .get(&company_id)
            .copied()
            .unwrap_or(0))
    }
}
