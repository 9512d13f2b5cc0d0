//! Document aggregate: composes the calculator, sequencer, lifecycle
//! rules, FX resolution, and quota guard over a [`Store`].
//!
//! Operation order on create is fixed: validation, quota, totals,
//! number assignment, persistence, usage recording. Usage recording is
//! best effort; a failure there never fails the created document.

use chrono::Utc;
use engine_core::config::Settings;
use engine_core::error::EngineError;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::models::{
    month_key, Company, CreateCompany, CreateExchangeRate, CurrencyCode, Document, DocumentStatus,
    DocumentType, ExchangeRate, LimitKind, LineItem, LineItemInput, ListDocumentsFilter,
    NewDocument, Party, PartyKind, PlanFeature, QuotationStatus, UpdateDocument,
};
use crate::services::cache::ViewCache;
use crate::services::numbering;
use crate::services::quota::{QuotaDecision, QuotaGuard};
use crate::services::store::Store;
use crate::services::totals::{self, CalculatedDocument, DocumentTotals};
use crate::services::{fx, lifecycle};

/// Identity of the caller and the company they act on.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub company_id: Uuid,
}

/// A document together with its persisted line items.
#[derive(Debug, Clone)]
pub struct CreatedDocument {
    pub document: Document,
    pub items: Vec<LineItem>,
}

pub struct DocumentEngine {
    store: Arc<dyn Store>,
    quota: QuotaGuard,
    cache: ViewCache,
}

impl DocumentEngine {
    pub fn new(store: Arc<dyn Store>, admin_user_ids: &[Uuid]) -> Self {
        let quota = QuotaGuard::new(Arc::clone(&store), admin_user_ids);
        DocumentEngine {
            store,
            quota,
            cache: ViewCache::new(),
        }
    }

    pub fn from_settings(store: Arc<dyn Store>, settings: &Settings) -> Self {
        Self::new(store, &settings.admin_user_ids)
    }

    // Companies

    #[instrument(skip(self, input), fields(owner = %input.owner_user_id))]
    pub async fn create_company(&self, input: CreateCompany) -> Result<Company, EngineError> {
        let decision = self
            .quota
            .check_limit(LimitKind::Company, input.owner_user_id, Uuid::nil())
            .await?;
        deny_to_error(decision)?;

        let company = Company {
            company_id: Uuid::new_v4(),
            owner_user_id: input.owner_user_id,
            name: input.name,
            base_currency: input.base_currency,
            enabled_currencies: vec![input.base_currency],
            created_utc: Utc::now(),
        };
        self.store.insert_company(&company).await?;
        Ok(company)
    }

    /// Add a currency to the company's enabled set. Idempotent.
    #[instrument(skip(self), fields(company_id = %ctx.company_id, currency = currency.as_str()))]
    pub async fn enable_currency(
        &self,
        ctx: RequestContext,
        currency: CurrencyCode,
    ) -> Result<Company, EngineError> {
        let mut company = self.load_company(ctx.company_id).await?;
        if !company.enabled_currencies.contains(&currency) {
            company.enabled_currencies.push(currency);
            self.store
                .update_company_currencies(
                    company.company_id,
                    company.base_currency,
                    &company.enabled_currencies,
                )
                .await?;
        }
        Ok(company)
    }

    /// Remove a currency from the enabled set. The base currency cannot
    /// be disabled, nor can a currency any document is denominated in.
    #[instrument(skip(self), fields(company_id = %ctx.company_id, currency = currency.as_str()))]
    pub async fn disable_currency(
        &self,
        ctx: RequestContext,
        currency: CurrencyCode,
    ) -> Result<Company, EngineError> {
        let mut company = self.load_company(ctx.company_id).await?;
        if currency == company.base_currency {
            return Err(EngineError::validation(
                "the base currency cannot be disabled",
            ));
        }
        let in_use = self
            .store
            .count_documents_in_currency(company.company_id, currency)
            .await?;
        if in_use > 0 {
            return Err(EngineError::state_conflict(format!(
                "{} documents are denominated in {}",
                in_use, currency
            )));
        }
        company.enabled_currencies.retain(|c| *c != currency);
        self.store
            .update_company_currencies(
                company.company_id,
                company.base_currency,
                &company.enabled_currencies,
            )
            .await?;
        Ok(company)
    }

    /// Change the base currency. Only possible while no documents exist,
    /// since all persisted base-currency values would otherwise be wrong.
    #[instrument(skip(self), fields(company_id = %ctx.company_id, currency = currency.as_str()))]
    pub async fn set_base_currency(
        &self,
        ctx: RequestContext,
        currency: CurrencyCode,
    ) -> Result<Company, EngineError> {
        let mut company = self.load_company(ctx.company_id).await?;
        let documents = self.store.count_documents(company.company_id).await?;
        if documents > 0 {
            return Err(EngineError::state_conflict(
                "the base currency is fixed once documents exist",
            ));
        }
        company.base_currency = currency;
        if !company.enabled_currencies.contains(&currency) {
            company.enabled_currencies.push(currency);
        }
        self.store
            .update_company_currencies(
                company.company_id,
                company.base_currency,
                &company.enabled_currencies,
            )
            .await?;
        Ok(company)
    }

    // Exchange rates

    #[instrument(skip(self, input), fields(company_id = %ctx.company_id))]
    pub async fn add_exchange_rate(
        &self,
        ctx: RequestContext,
        input: CreateExchangeRate,
    ) -> Result<ExchangeRate, EngineError> {
        if input.rate <= Decimal::ZERO {
            return Err(EngineError::validation("exchange rate must be positive"));
        }
        let company = self.load_company(ctx.company_id).await?;
        if input.quote_currency == company.base_currency {
            return Err(EngineError::validation(
                "a rate against the base currency itself is meaningless",
            ));
        }
        let rate = ExchangeRate {
            rate_id: Uuid::new_v4(),
            company_id: company.company_id,
            base_currency: company.base_currency,
            quote_currency: input.quote_currency,
            rate: fx::round_rate(input.rate),
            effective_date: input.effective_date,
            source: input.source,
            created_utc: Utc::now(),
        };
        self.store.insert_exchange_rate(&rate).await?;
        Ok(rate)
    }

    // Documents

    #[instrument(skip(self, input, items), fields(company_id = %ctx.company_id, doc_type = input.doc_type.as_str()))]
    pub async fn create_document(
        &self,
        ctx: RequestContext,
        input: NewDocument,
        items: Vec<LineItemInput>,
    ) -> Result<CreatedDocument, EngineError> {
        let company = self.load_company(ctx.company_id).await?;

        if !company.is_currency_enabled(input.currency) {
            return Err(EngineError::validation(format!(
                "currency {} is not enabled for this company",
                input.currency
            )));
        }
        self.validate_party(&company, input.doc_type, input.party_id)
            .await?;

        if input.doc_type == DocumentType::Invoice {
            let decision = self
                .quota
                .check_limit(LimitKind::InvoicePerMonth, ctx.user_id, ctx.company_id)
                .await?;
            deny_to_error(decision)?;
        }
        if input.currency != company.base_currency {
            self.require_multi_currency(ctx.user_id).await?;
        }

        let (fx_rate, fx_rate_date) = self.resolve_fx(&company, &input).await?;
        let calc = totals::calculate(&items, fx_rate)?;

        let numbers = self
            .store
            .list_document_numbers(company.company_id, input.doc_type)
            .await?;
        let number = numbering::next_number(&numbers, input.doc_type);

        let now = Utc::now();
        let document = Document {
            document_id: Uuid::new_v4(),
            company_id: company.company_id,
            doc_type: input.doc_type,
            number,
            party_id: input.party_id,
            status: DocumentStatus::initial(input.doc_type),
            issue_date: input.issue_date,
            due_date: input.due_date,
            currency: input.currency,
            fx_rate,
            fx_rate_date,
            notes: input.notes,
            terms: input.terms,
            subtotal_fx: calc.totals_fx.subtotal,
            vat_fx: calc.totals_fx.vat,
            total_fx: calc.totals_fx.total,
            subtotal: calc.totals.subtotal,
            vat: calc.totals.vat,
            total: calc.totals.total,
            converted_invoice_id: None,
            created_utc: now,
            updated_utc: now,
        };
        let line_items = materialize_items(&calc, &document);

        self.store.insert_document(&document).await?;
        if let Err(err) = self.store.insert_line_items(&line_items).await {
            // Roll the header back rather than leave an orphan.
            if let Err(cleanup) = self
                .store
                .delete_document(document.company_id, document.document_id)
                .await
            {
                warn!(error = %cleanup, document_id = %document.document_id,
                    "failed to clean up orphaned document header");
            }
            return Err(err.into());
        }
        self.cache.invalidate(company.company_id, document.doc_type);

        if document.doc_type == DocumentType::Invoice {
            self.record_invoice_usage(ctx).await;
        }

        Ok(CreatedDocument {
            document,
            items: line_items,
        })
    }

    pub async fn get_document(
        &self,
        ctx: RequestContext,
        document_id: Uuid,
    ) -> Result<(Document, Vec<LineItem>), EngineError> {
        let document = self.load_document(ctx.company_id, document_id).await?;
        let items = self
            .store
            .get_line_items(ctx.company_id, document_id)
            .await?;
        Ok((document, items))
    }

    /// List one type of document, newest cache-backed, filtered in
    /// memory so a cached list serves every filter combination.
    #[instrument(skip(self, filter), fields(company_id = %ctx.company_id, doc_type = doc_type.as_str()))]
    pub async fn list_documents(
        &self,
        ctx: RequestContext,
        doc_type: DocumentType,
        filter: &ListDocumentsFilter,
    ) -> Result<Vec<Document>, EngineError> {
        let documents = match self.cache.get(ctx.company_id, doc_type) {
            Some(cached) => cached,
            None => {
                let fetched = self.store.list_documents(ctx.company_id, doc_type).await?;
                // A fetch racing a mutation can put a snapshot from
                // before that mutation's invalidate; listings are
                // allowed to be briefly stale and heal on the next
                // invalidate.
                self.cache.put(ctx.company_id, doc_type, fetched)
            }
        };

        Ok(documents
            .iter()
            .filter(|d| filter.status.is_none_or(|s| d.status == s))
            .filter(|d| filter.party_id.is_none_or(|p| d.party_id == Some(p)))
            .filter(|d| filter.start_date.is_none_or(|s| d.issue_date >= s))
            .filter(|d| filter.end_date.is_none_or(|e| d.issue_date <= e))
            .cloned()
            .collect())
    }

    /// Patch the header and optionally replace the full set of line
    /// items. Header fields are only mutable while the document is a
    /// draft; item replacement additionally requires an item-editable
    /// status.
    #[instrument(skip(self, patch, items), fields(company_id = %ctx.company_id, document_id = %document_id))]
    pub async fn update_document(
        &self,
        ctx: RequestContext,
        document_id: Uuid,
        patch: UpdateDocument,
        items: Option<Vec<LineItemInput>>,
    ) -> Result<CreatedDocument, EngineError> {
        let mut document = self.load_document(ctx.company_id, document_id).await?;

        if document.status != DocumentStatus::initial(document.doc_type) {
            return Err(EngineError::state_conflict(format!(
                "a {} in status '{}' cannot be edited",
                document.doc_type, document.status
            )));
        }
        if items.is_some() {
            lifecycle::ensure_items_editable(document.status)?;
        }

        let company = self.load_company(ctx.company_id).await?;
        if let Some(party_id) = patch.party_id {
            self.validate_party(&company, document.doc_type, Some(party_id))
                .await?;
            document.party_id = Some(party_id);
        }
        if let Some(issue_date) = patch.issue_date {
            document.issue_date = issue_date;
        }
        if let Some(due_date) = patch.due_date {
            document.due_date = Some(due_date);
        }
        if let Some(notes) = patch.notes {
            document.notes = Some(notes);
        }
        if let Some(terms) = patch.terms {
            document.terms = Some(terms);
        }
        let fx_changed = match patch.fx_rate {
            Some(rate) => {
                if rate <= Decimal::ZERO {
                    return Err(EngineError::validation("exchange rate must be positive"));
                }
                if document.currency == company.base_currency && rate != Decimal::ONE {
                    return Err(EngineError::validation(
                        "a base-currency document always has rate 1",
                    ));
                }
                document.fx_rate = fx::round_rate(rate);
                true
            }
            None => false,
        };
        if let Some(fx_rate_date) = patch.fx_rate_date {
            document.fx_rate_date = Some(fx_rate_date);
        }

        let replacement = match items {
            Some(inputs) => Some(totals::calculate(&inputs, document.fx_rate)?),
            None if fx_changed => {
                // Rate changed without new items: recompute from the
                // stored lines so header and lines stay consistent.
                let stored = self
                    .store
                    .get_line_items(ctx.company_id, document_id)
                    .await?;
                let inputs: Vec<LineItemInput> =
                    stored.into_iter().map(line_item_to_input).collect();
                Some(totals::calculate(&inputs, document.fx_rate)?)
            }
            None => None,
        };

        if let Some(calc) = &replacement {
            document.subtotal_fx = calc.totals_fx.subtotal;
            document.vat_fx = calc.totals_fx.vat;
            document.total_fx = calc.totals_fx.total;
            document.subtotal = calc.totals.subtotal;
            document.vat = calc.totals.vat;
            document.total = calc.totals.total;
        }
        document.updated_utc = Utc::now();

        // Header first: if the item swap fails the header totals are
        // already durable and a retry of the swap reconciles the lines.
        self.store.update_document(&document).await?;
        let line_items = match replacement {
            Some(calc) => {
                let line_items = materialize_items(&calc, &document);
                self.store
                    .delete_line_items(ctx.company_id, document_id)
                    .await?;
                self.store.insert_line_items(&line_items).await?;
                line_items
            }
            None => {
                self.store
                    .get_line_items(ctx.company_id, document_id)
                    .await?
            }
        };
        self.cache.invalidate(ctx.company_id, document.doc_type);

        Ok(CreatedDocument {
            document,
            items: line_items,
        })
    }

    #[instrument(skip(self), fields(company_id = %ctx.company_id, document_id = %document_id, to = to.as_str()))]
    pub async fn update_status(
        &self,
        ctx: RequestContext,
        document_id: Uuid,
        to: DocumentStatus,
    ) -> Result<Document, EngineError> {
        let mut document = self.load_document(ctx.company_id, document_id).await?;
        lifecycle::validate_transition(document.status, to)?;
        document.status = to;
        document.updated_utc = Utc::now();
        self.store.update_document(&document).await?;
        self.cache.invalidate(ctx.company_id, document.doc_type);
        Ok(document)
    }

    #[instrument(skip(self), fields(company_id = %ctx.company_id, document_id = %document_id))]
    pub async fn delete_document(
        &self,
        ctx: RequestContext,
        document_id: Uuid,
    ) -> Result<(), EngineError> {
        let document = self.load_document(ctx.company_id, document_id).await?;
        lifecycle::ensure_deletable(&document)?;
        let existed = self
            .store
            .delete_document(ctx.company_id, document_id)
            .await?;
        if !existed {
            return Err(EngineError::not_found("document not found"));
        }
        self.cache.invalidate(ctx.company_id, document.doc_type);
        Ok(())
    }

    /// Convert an accepted quotation into a draft invoice.
    ///
    /// Monetary values are copied verbatim, never recomputed: the
    /// invoice bills exactly what was quoted, at the quoted rate. The
    /// invoice draws its own number from the invoice sequence and the
    /// quotation keeps a back-reference to it.
    #[instrument(skip(self), fields(company_id = %ctx.company_id, quotation_id = %quotation_id))]
    pub async fn convert_to_invoice(
        &self,
        ctx: RequestContext,
        quotation_id: Uuid,
    ) -> Result<CreatedDocument, EngineError> {
        let mut quotation = self.load_document(ctx.company_id, quotation_id).await?;
        lifecycle::ensure_convertible(&quotation)?;

        let company = self.load_company(ctx.company_id).await?;
        if quotation.currency != company.base_currency {
            self.require_multi_currency(ctx.user_id).await?;
        }

        let numbers = self
            .store
            .list_document_numbers(ctx.company_id, DocumentType::Invoice)
            .await?;
        let number = numbering::next_number(&numbers, DocumentType::Invoice);

        let now = Utc::now();
        let invoice = Document {
            document_id: Uuid::new_v4(),
            company_id: quotation.company_id,
            doc_type: DocumentType::Invoice,
            number,
            party_id: quotation.party_id,
            status: DocumentStatus::initial(DocumentType::Invoice),
            issue_date: now.date_naive(),
            due_date: None,
            currency: quotation.currency,
            fx_rate: quotation.fx_rate,
            fx_rate_date: quotation.fx_rate_date,
            notes: quotation.notes.clone(),
            terms: quotation.terms.clone(),
            subtotal_fx: quotation.subtotal_fx,
            vat_fx: quotation.vat_fx,
            total_fx: quotation.total_fx,
            subtotal: quotation.subtotal,
            vat: quotation.vat,
            total: quotation.total,
            converted_invoice_id: None,
            created_utc: now,
            updated_utc: now,
        };

        let quotation_items = self
            .store
            .get_line_items(ctx.company_id, quotation_id)
            .await?;
        let invoice_items: Vec<LineItem> = quotation_items
            .iter()
            .map(|item| LineItem {
                line_item_id: Uuid::new_v4(),
                document_id: invoice.document_id,
                created_utc: now,
                ..item.clone()
            })
            .collect();

        self.store.insert_document(&invoice).await?;
        if let Err(err) = self.store.insert_line_items(&invoice_items).await {
            self.rollback_invoice(&invoice).await;
            return Err(err.into());
        }

        quotation.status = DocumentStatus::Quotation(QuotationStatus::Converted);
        quotation.converted_invoice_id = Some(invoice.document_id);
        quotation.updated_utc = now;
        if let Err(err) = self.store.update_document(&quotation).await {
            self.rollback_invoice(&invoice).await;
            return Err(err.into());
        }

        self.cache
            .invalidate(ctx.company_id, DocumentType::Quotation);
        self.cache.invalidate(ctx.company_id, DocumentType::Invoice);

        Ok(CreatedDocument {
            document: invoice,
            items: invoice_items,
        })
    }

    // Delegates

    /// Totals for a form that has not been persisted, in the document
    /// currency.
    pub fn calculate_totals(
        &self,
        items: &[LineItemInput],
    ) -> Result<DocumentTotals, EngineError> {
        totals::calculate_totals(items)
    }

    /// The number the next document of this type would receive.
    /// Advisory only; creation derives its own.
    pub async fn next_number(
        &self,
        ctx: RequestContext,
        doc_type: DocumentType,
    ) -> Result<String, EngineError> {
        let numbers = self
            .store
            .list_document_numbers(ctx.company_id, doc_type)
            .await?;
        Ok(numbering::next_number(&numbers, doc_type))
    }

    /// The stored rate that would apply to a document in `quote` issued
    /// on `as_of`.
    pub async fn resolve_rate(
        &self,
        ctx: RequestContext,
        quote: CurrencyCode,
        as_of: chrono::NaiveDate,
    ) -> Result<Option<ExchangeRate>, EngineError> {
        let rates = self
            .store
            .list_exchange_rates(ctx.company_id, quote)
            .await?;
        Ok(fx::resolve_rate(&rates, quote, as_of).cloned())
    }

    pub async fn check_limit(
        &self,
        kind: LimitKind,
        ctx: RequestContext,
    ) -> Result<QuotaDecision, EngineError> {
        self.quota
            .check_limit(kind, ctx.user_id, ctx.company_id)
            .await
    }

    // Internals

    async fn load_company(&self, company_id: Uuid) -> Result<Company, EngineError> {
        self.store
            .get_company(company_id)
            .await?
            .ok_or_else(|| EngineError::not_found("company not found"))
    }

    async fn load_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Document, EngineError> {
        self.store
            .get_document(company_id, document_id)
            .await?
            .ok_or_else(|| EngineError::not_found("document not found"))
    }

    /// Quotations and invoices bill a client; a purchase records a
    /// supplier document and its party is optional.
    async fn validate_party(
        &self,
        company: &Company,
        doc_type: DocumentType,
        party_id: Option<Uuid>,
    ) -> Result<(), EngineError> {
        let expected = match doc_type {
            DocumentType::Quotation | DocumentType::Invoice => PartyKind::Client,
            DocumentType::Purchase => PartyKind::Supplier,
        };
        let Some(party_id) = party_id else {
            if doc_type == DocumentType::Purchase {
                return Ok(());
            }
            return Err(EngineError::validation(format!(
                "a {} requires a client party",
                doc_type
            )));
        };
        let party: Party = self
            .store
            .get_party(company.company_id, party_id)
            .await?
            .ok_or_else(|| EngineError::not_found("party not found"))?;
        if party.kind != expected {
            return Err(EngineError::validation(format!(
                "party '{}' is a {}, a {} requires a {}",
                party.name,
                party.kind.as_str(),
                doc_type,
                expected.as_str()
            )));
        }
        Ok(())
    }

    async fn require_multi_currency(&self, user_id: Uuid) -> Result<(), EngineError> {
        if self
            .quota
            .feature_enabled(user_id, PlanFeature::MultiCurrency)
            .await?
        {
            Ok(())
        } else {
            Err(EngineError::quota_exceeded(
                "the current plan does not include multi-currency documents",
            ))
        }
    }

    /// Pick the document's FX rate: a manual override wins, then the
    /// most recent stored rate on or before the rate date, then 1.
    async fn resolve_fx(
        &self,
        company: &Company,
        input: &NewDocument,
    ) -> Result<(Decimal, Option<chrono::NaiveDate>), EngineError> {
        if input.currency == company.base_currency {
            if let Some(rate) = input.fx_rate {
                if rate <= Decimal::ZERO {
                    return Err(EngineError::validation("exchange rate must be positive"));
                }
                if rate != Decimal::ONE {
                    return Err(EngineError::validation(
                        "a base-currency document always has rate 1",
                    ));
                }
            }
            return Ok((Decimal::ONE, None));
        }
        if let Some(rate) = input.fx_rate {
            if rate <= Decimal::ZERO {
                return Err(EngineError::validation("exchange rate must be positive"));
            }
            let date = input.fx_rate_date.or(Some(input.issue_date));
            return Ok((fx::round_rate(rate), date));
        }

        let as_of = input.fx_rate_date.unwrap_or(input.issue_date);
        let rates = self
            .store
            .list_exchange_rates(company.company_id, input.currency)
            .await?;
        match fx::resolve_rate(&rates, input.currency, as_of) {
            Some(stored) => Ok((stored.rate, Some(stored.effective_date))),
            None => {
                warn!(
                    company_id = %company.company_id,
                    currency = input.currency.as_str(),
                    %as_of,
                    "no exchange rate on record, defaulting to 1"
                );
                Ok((Decimal::ONE, None))
            }
        }
    }

    /// Best effort: a usage write failure must not fail the invoice.
    async fn record_invoice_usage(&self, ctx: RequestContext) {
        let month = month_key(Utc::now().date_naive());
        if let Err(err) = self
            .store
            .increment_usage(ctx.user_id, ctx.company_id, &month)
            .await
        {
            warn!(
                error = %err,
                user_id = %ctx.user_id,
                company_id = %ctx.company_id,
                month = %month,
                "failed to record invoice usage"
            );
        }
    }

    async fn rollback_invoice(&self, invoice: &Document) {
        if let Err(cleanup) = self
            .store
            .delete_document(invoice.company_id, invoice.document_id)
            .await
        {
            warn!(error = %cleanup, document_id = %invoice.document_id,
                "failed to roll back invoice after conversion failure");
        }
    }
}

fn deny_to_error(decision: QuotaDecision) -> Result<(), EngineError> {
    if decision.allowed {
        Ok(())
    } else {
        Err(EngineError::quota_exceeded(
            decision
                .reason
                .unwrap_or_else(|| "plan limit reached".to_string()),
        ))
    }
}

fn materialize_items(calc: &CalculatedDocument, document: &Document) -> Vec<LineItem> {
    calc.lines
        .iter()
        .map(|line| LineItem {
            line_item_id: Uuid::new_v4(),
            document_id: document.document_id,
            company_id: document.company_id,
            description: line.input.description.clone(),
            quantity: line.input.quantity,
            unit_price: line.input.unit_price,
            vat_rate: line.input.vat_rate,
            product_id: line.input.product_id,
            account_id: line.input.account_id,
            sort_order: line.sort_order,
            subtotal_fx: line.subtotal_fx,
            vat_fx: line.vat_fx,
            total_fx: line.total_fx,
            subtotal: line.subtotal,
            vat: line.vat,
            total: line.total,
            created_utc: document.updated_utc,
        })
        .collect()
}

fn line_item_to_input(item: LineItem) -> LineItemInput {
    LineItemInput {
        description: item.description,
        quantity: item.quantity,
        unit_price: item.unit_price,
        vat_rate: item.vat_rate,
        product_id: item.product_id,
        account_id: item.account_id,
    }
}
