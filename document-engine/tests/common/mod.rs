//! Shared test harness: an engine over the in-memory store with a
//! seeded company, parties, and subscription.
#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use document_engine::models::{
    Company, CurrencyCode, DocumentType, LineItemInput, NewDocument, Party, PartyKind, PlanTier,
    Subscription, SubscriptionStatus,
};
use document_engine::services::memory::MemoryStore;
use document_engine::services::{DocumentEngine, RequestContext, Store};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub engine: DocumentEngine,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub client_id: Uuid,
    pub supplier_id: Uuid,
}

impl TestContext {
    /// Engine over a fresh store, seeded with one company (base EUR,
    /// USD enabled), a client, a supplier, and an active unlimited
    /// subscription.
    pub async fn new() -> Self {
        let ctx = Self::with_admins(&[]).await;
        ctx.subscribe(SubscriptionStatus::Active, PlanTier::Unlimited);
        ctx
    }

    /// Same as [`new`] but with an admin allow-list and no
    /// subscription seeded.
    pub async fn with_admins(admin_user_ids: &[Uuid]) -> Self {
        let store = Arc::new(MemoryStore::new());
        let engine = DocumentEngine::new(store.clone(), admin_user_ids);

        let user_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();
        let client_id = Uuid::new_v4();
        let supplier_id = Uuid::new_v4();

        store
            .insert_company(&Company {
                company_id,
                owner_user_id: user_id,
                name: "Acme GmbH".to_string(),
                base_currency: CurrencyCode::Eur,
                enabled_currencies: vec![CurrencyCode::Eur, CurrencyCode::Usd],
                created_utc: Utc::now(),
            })
            .await
            .unwrap();
        store.insert_party(Party {
            party_id: client_id,
            company_id,
            name: "Big Client AG".to_string(),
            kind: PartyKind::Client,
            email: Some("billing@client.example".to_string()),
            created_utc: Utc::now(),
        });
        store.insert_party(Party {
            party_id: supplier_id,
            company_id,
            name: "Parts Supplier BV".to_string(),
            kind: PartyKind::Supplier,
            email: None,
            created_utc: Utc::now(),
        });

        TestContext {
            store,
            engine,
            user_id,
            company_id,
            client_id,
            supplier_id,
        }
    }

    pub fn ctx(&self) -> RequestContext {
        RequestContext {
            user_id: self.user_id,
            company_id: self.company_id,
        }
    }

    pub fn subscribe(&self, status: SubscriptionStatus, plan: PlanTier) {
        self.store.insert_subscription(Subscription {
            user_id: self.user_id,
            status,
            plan,
            trial_ends_at: None,
        });
    }

    /// A document draft in the company base currency, addressed to the
    /// seeded client (or supplier for purchases).
    pub fn new_document(&self, doc_type: DocumentType) -> NewDocument {
        let party_id = match doc_type {
            DocumentType::Purchase => Some(self.supplier_id),
            _ => Some(self.client_id),
        };
        NewDocument {
            doc_type,
            party_id,
            issue_date: today(),
            due_date: None,
            currency: CurrencyCode::Eur,
            fx_rate: None,
            fx_rate_date: None,
            notes: None,
            terms: None,
        }
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn line(quantity: Decimal, unit_price: Decimal, vat_rate: Decimal) -> LineItemInput {
    LineItemInput {
        description: "Consulting".to_string(),
        quantity,
        unit_price,
        vat_rate,
        product_id: None,
        account_id: None,
    }
}
