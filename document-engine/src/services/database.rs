//! PostgreSQL store.
//!
//! Enumerated fields are persisted as their canonical lowercase words
//! and re-parsed on read; a value that fails to parse means the stored
//! data predates or postdates this binary and surfaces as a database
//! error rather than a panic.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use engine_core::error::StorageError;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::models::{
    Company, CurrencyCode, Document, DocumentStatus, DocumentType, ExchangeRate, LineItem, Party,
    PartyKind, PlanTier, RateSource, Subscription, SubscriptionStatus, UsageCounter,
};
use crate::services::store::Store;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new database connection pool.
    #[instrument(skip(database_url))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StorageError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| {
                StorageError::Database(anyhow::anyhow!("Failed to connect: {}", e))
            })?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Connect using the layered configuration.
    pub async fn from_settings(
        settings: &engine_core::config::DatabaseSettings,
    ) -> Result<Self, StorageError> {
        Self::new(
            &settings.url,
            settings.max_connections,
            settings.min_connections,
        )
        .await
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StorageError::Database(anyhow::anyhow!("Health check failed: {}", e))
            })?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), StorageError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Database(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

// Row types: enum-valued columns come back as text and are parsed into
// the domain types on conversion.

#[derive(sqlx::FromRow)]
struct CompanyRow {
    company_id: Uuid,
    owner_user_id: Uuid,
    name: String,
    base_currency: String,
    enabled_currencies: Vec<String>,
    created_utc: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct PartyRow {
    party_id: Uuid,
    company_id: Uuid,
    name: String,
    kind: String,
    email: Option<String>,
    created_utc: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ExchangeRateRow {
    rate_id: Uuid,
    company_id: Uuid,
    base_currency: String,
    quote_currency: String,
    rate: Decimal,
    effective_date: NaiveDate,
    source: String,
    created_utc: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    document_id: Uuid,
    company_id: Uuid,
    doc_type: String,
    number: String,
    party_id: Option<Uuid>,
    status: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    currency: String,
    fx_rate: Decimal,
    fx_rate_date: Option<NaiveDate>,
    notes: Option<String>,
    terms: Option<String>,
    subtotal_fx: Decimal,
    vat_fx: Decimal,
    total_fx: Decimal,
    subtotal: Decimal,
    vat: Decimal,
    total: Decimal,
    converted_invoice_id: Option<Uuid>,
    created_utc: DateTime<Utc>,
    updated_utc: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct LineItemRow {
    line_item_id: Uuid,
    document_id: Uuid,
    company_id: Uuid,
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    vat_rate: Decimal,
    product_id: Option<Uuid>,
    account_id: Option<Uuid>,
    sort_order: i32,
    subtotal_fx: Decimal,
    vat_fx: Decimal,
    total_fx: Decimal,
    subtotal: Decimal,
    vat: Decimal,
    total: Decimal,
    created_utc: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    user_id: Uuid,
    status: String,
    plan: String,
    trial_ends_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct UsageRow {
    user_id: Uuid,
    company_id: Uuid,
    month: String,
    invoices_created: i64,
}

fn corrupt(what: &str, value: &str) -> StorageError {
    StorageError::Database(anyhow::anyhow!("unrecognized {} '{}' in storage", what, value))
}

fn parse_currency(s: &str) -> Result<CurrencyCode, StorageError> {
    CurrencyCode::parse(s).ok_or_else(|| corrupt("currency", s))
}

impl TryFrom<CompanyRow> for Company {
    type Error = StorageError;

    fn try_from(row: CompanyRow) -> Result<Self, StorageError> {
        let enabled_currencies = row
            .enabled_currencies
            .iter()
            .map(|s| parse_currency(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Company {
            company_id: row.company_id,
            owner_user_id: row.owner_user_id,
            name: row.name,
            base_currency: parse_currency(&row.base_currency)?,
            enabled_currencies,
            created_utc: row.created_utc,
        })
    }
}

impl TryFrom<PartyRow> for Party {
    type Error = StorageError;

    fn try_from(row: PartyRow) -> Result<Self, StorageError> {
        Ok(Party {
            party_id: row.party_id,
            company_id: row.company_id,
            name: row.name,
            kind: PartyKind::parse(&row.kind).ok_or_else(|| corrupt("party kind", &row.kind))?,
            email: row.email,
            created_utc: row.created_utc,
        })
    }
}

impl TryFrom<ExchangeRateRow> for ExchangeRate {
    type Error = StorageError;

    fn try_from(row: ExchangeRateRow) -> Result<Self, StorageError> {
        Ok(ExchangeRate {
            rate_id: row.rate_id,
            company_id: row.company_id,
            base_currency: parse_currency(&row.base_currency)?,
            quote_currency: parse_currency(&row.quote_currency)?,
            rate: row.rate,
            effective_date: row.effective_date,
            source: RateSource::parse(&row.source)
                .ok_or_else(|| corrupt("rate source", &row.source))?,
            created_utc: row.created_utc,
        })
    }
}

impl TryFrom<DocumentRow> for Document {
    type Error = StorageError;

    fn try_from(row: DocumentRow) -> Result<Self, StorageError> {
        let doc_type = DocumentType::parse(&row.doc_type)
            .ok_or_else(|| corrupt("document type", &row.doc_type))?;
        let status = DocumentStatus::parse(doc_type, &row.status)
            .ok_or_else(|| corrupt("document status", &row.status))?;
        Ok(Document {
            document_id: row.document_id,
            company_id: row.company_id,
            doc_type,
            number: row.number,
            party_id: row.party_id,
            status,
            issue_date: row.issue_date,
            due_date: row.due_date,
            currency: parse_currency(&row.currency)?,
            fx_rate: row.fx_rate,
            fx_rate_date: row.fx_rate_date,
            notes: row.notes,
            terms: row.terms,
            subtotal_fx: row.subtotal_fx,
            vat_fx: row.vat_fx,
            total_fx: row.total_fx,
            subtotal: row.subtotal,
            vat: row.vat,
            total: row.total,
            converted_invoice_id: row.converted_invoice_id,
            created_utc: row.created_utc,
            updated_utc: row.updated_utc,
        })
    }
}

impl From<LineItemRow> for LineItem {
    fn from(row: LineItemRow) -> Self {
        LineItem {
            line_item_id: row.line_item_id,
            document_id: row.document_id,
            company_id: row.company_id,
            description: row.description,
            quantity: row.quantity,
            unit_price: row.unit_price,
            vat_rate: row.vat_rate,
            product_id: row.product_id,
            account_id: row.account_id,
            sort_order: row.sort_order,
            subtotal_fx: row.subtotal_fx,
            vat_fx: row.vat_fx,
            total_fx: row.total_fx,
            subtotal: row.subtotal,
            vat: row.vat,
            total: row.total,
            created_utc: row.created_utc,
        }
    }
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = StorageError;

    fn try_from(row: SubscriptionRow) -> Result<Self, StorageError> {
        Ok(Subscription {
            user_id: row.user_id,
            status: SubscriptionStatus::parse(&row.status)
                .ok_or_else(|| corrupt("subscription status", &row.status))?,
            plan: PlanTier::parse(&row.plan).ok_or_else(|| corrupt("plan tier", &row.plan))?,
            trial_ends_at: row.trial_ends_at,
        })
    }
}

const DOCUMENT_COLUMNS: &str = "document_id, company_id, doc_type, number, party_id, status, \
     issue_date, due_date, currency, fx_rate, fx_rate_date, notes, terms, \
     subtotal_fx, vat_fx, total_fx, subtotal, vat, total, \
     converted_invoice_id, created_utc, updated_utc";

const LINE_ITEM_COLUMNS: &str = "line_item_id, document_id, company_id, description, quantity, \
     unit_price, vat_rate, product_id, account_id, sort_order, \
     subtotal_fx, vat_fx, total_fx, subtotal, vat, total, created_utc";

fn currency_strings(currencies: &[CurrencyCode]) -> Vec<String> {
    currencies.iter().map(|c| c.as_str().to_string()).collect()
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self, company), fields(company_id = %company.company_id))]
    async fn insert_company(&self, company: &Company) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO companies (company_id, owner_user_id, name, base_currency, enabled_currencies, created_utc)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(company.company_id)
        .bind(company.owner_user_id)
        .bind(&company.name)
        .bind(company.base_currency.as_str())
        .bind(currency_strings(&company.enabled_currencies))
        .bind(company.created_utc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_company(&self, company_id: Uuid) -> Result<Option<Company>, StorageError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT company_id, owner_user_id, name, base_currency, enabled_currencies, created_utc
            FROM companies
            WHERE company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Company::try_from).transpose()
    }

    #[instrument(skip(self, enabled_currencies))]
    async fn update_company_currencies(
        &self,
        company_id: Uuid,
        base_currency: CurrencyCode,
        enabled_currencies: &[CurrencyCode],
    ) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET base_currency = $2, enabled_currencies = $3
            WHERE company_id = $1
            "#,
        )
        .bind(company_id)
        .bind(base_currency.as_str())
        .bind(currency_strings(enabled_currencies))
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_companies(&self, owner_user_id: Uuid) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE owner_user_id = $1")
                .bind(owner_user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn get_party(
        &self,
        company_id: Uuid,
        party_id: Uuid,
    ) -> Result<Option<Party>, StorageError> {
        let row = sqlx::query_as::<_, PartyRow>(
            r#"
            SELECT party_id, company_id, name, kind, email, created_utc
            FROM parties
            WHERE company_id = $1 AND party_id = $2
            "#,
        )
        .bind(company_id)
        .bind(party_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Party::try_from).transpose()
    }

    #[instrument(skip(self, rate), fields(rate_id = %rate.rate_id))]
    async fn insert_exchange_rate(&self, rate: &ExchangeRate) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO exchange_rates (rate_id, company_id, base_currency, quote_currency, rate, effective_date, source, created_utc)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(rate.rate_id)
        .bind(rate.company_id)
        .bind(rate.base_currency.as_str())
        .bind(rate.quote_currency.as_str())
        .bind(rate.rate)
        .bind(rate.effective_date)
        .bind(rate.source.as_str())
        .bind(rate.created_utc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_exchange_rates(
        &self,
        company_id: Uuid,
        quote_currency: CurrencyCode,
    ) -> Result<Vec<ExchangeRate>, StorageError> {
        let rows = sqlx::query_as::<_, ExchangeRateRow>(
            r#"
            SELECT rate_id, company_id, base_currency, quote_currency, rate, effective_date, source, created_utc
            FROM exchange_rates
            WHERE company_id = $1 AND quote_currency = $2
            ORDER BY effective_date DESC, created_utc DESC
            "#,
        )
        .bind(company_id)
        .bind(quote_currency.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ExchangeRate::try_from).collect()
    }

    #[instrument(skip(self, document), fields(document_id = %document.document_id, number = %document.number))]
    async fn insert_document(&self, document: &Document) -> Result<(), StorageError> {
        sqlx::query(&format!(
            r#"
            INSERT INTO documents ({DOCUMENT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            "#,
        ))
        .bind(document.document_id)
        .bind(document.company_id)
        .bind(document.doc_type.as_str())
        .bind(&document.number)
        .bind(document.party_id)
        .bind(document.status.as_str())
        .bind(document.issue_date)
        .bind(document.due_date)
        .bind(document.currency.as_str())
        .bind(document.fx_rate)
        .bind(document.fx_rate_date)
        .bind(&document.notes)
        .bind(&document.terms)
        .bind(document.subtotal_fx)
        .bind(document.vat_fx)
        .bind(document.total_fx)
        .bind(document.subtotal)
        .bind(document.vat)
        .bind(document.total)
        .bind(document.converted_invoice_id)
        .bind(document.created_utc)
        .bind(document.updated_utc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Option<Document>, StorageError> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            r#"
            SELECT {DOCUMENT_COLUMNS}
            FROM documents
            WHERE company_id = $1 AND document_id = $2
            "#,
        ))
        .bind(company_id)
        .bind(document_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Document::try_from).transpose()
    }

    #[instrument(skip(self, document), fields(document_id = %document.document_id))]
    async fn update_document(&self, document: &Document) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET party_id = $2, status = $3, issue_date = $4, due_date = $5,
                fx_rate = $6, fx_rate_date = $7, notes = $8, terms = $9,
                subtotal_fx = $10, vat_fx = $11, total_fx = $12,
                subtotal = $13, vat = $14, total = $15,
                converted_invoice_id = $16, updated_utc = $17
            WHERE document_id = $1
            "#,
        )
        .bind(document.document_id)
        .bind(document.party_id)
        .bind(document.status.as_str())
        .bind(document.issue_date)
        .bind(document.due_date)
        .bind(document.fx_rate)
        .bind(document.fx_rate_date)
        .bind(&document.notes)
        .bind(&document.terms)
        .bind(document.subtotal_fx)
        .bind(document.vat_fx)
        .bind(document.total_fx)
        .bind(document.subtotal)
        .bind(document.vat)
        .bind(document.total)
        .bind(document.converted_invoice_id)
        .bind(document.updated_utc)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_document(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<bool, StorageError> {
        let result =
            sqlx::query("DELETE FROM documents WHERE company_id = $1 AND document_id = $2")
                .bind(company_id)
                .bind(document_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_documents(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query_as::<_, DocumentRow>(&format!(
            r#"
            SELECT {DOCUMENT_COLUMNS}
            FROM documents
            WHERE company_id = $1 AND doc_type = $2
            ORDER BY created_utc ASC
            "#,
        ))
        .bind(company_id)
        .bind(doc_type.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Document::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_document_numbers(
        &self,
        company_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Vec<String>, StorageError> {
        let numbers: Vec<String> = sqlx::query_scalar(
            "SELECT number FROM documents WHERE company_id = $1 AND doc_type = $2",
        )
        .bind(company_id)
        .bind(doc_type.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(numbers)
    }

    #[instrument(skip(self))]
    async fn count_documents(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE company_id = $1")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn count_documents_in_currency(
        &self,
        company_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE company_id = $1 AND currency = $2",
        )
        .bind(company_id)
        .bind(currency.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn insert_line_items(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        for item in items {
            sqlx::query(&format!(
                r#"
                INSERT INTO line_items ({LINE_ITEM_COLUMNS})
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                "#,
            ))
            .bind(item.line_item_id)
            .bind(item.document_id)
            .bind(item.company_id)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.vat_rate)
            .bind(item.product_id)
            .bind(item.account_id)
            .bind(item.sort_order)
            .bind(item.subtotal_fx)
            .bind(item.vat_fx)
            .bind(item.total_fx)
            .bind(item.subtotal)
            .bind(item.vat)
            .bind(item.total)
            .bind(item.created_utc)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<Vec<LineItem>, StorageError> {
        let rows = sqlx::query_as::<_, LineItemRow>(&format!(
            r#"
            SELECT {LINE_ITEM_COLUMNS}
            FROM line_items
            WHERE company_id = $1 AND document_id = $2
            ORDER BY sort_order ASC
            "#,
        ))
        .bind(company_id)
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(LineItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_line_items(
        &self,
        company_id: Uuid,
        document_id: Uuid,
    ) -> Result<u64, StorageError> {
        let result =
            sqlx::query("DELETE FROM line_items WHERE company_id = $1 AND document_id = $2")
                .bind(company_id)
                .bind(document_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn get_subscription(&self, user_id: Uuid) -> Result<Option<Subscription>, StorageError> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT user_id, status, plan, trial_ends_at
            FROM subscriptions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Subscription::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn get_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<Option<UsageCounter>, StorageError> {
        let row = sqlx::query_as::<_, UsageRow>(
            r#"
            SELECT user_id, company_id, month, invoices_created
            FROM usage_counters
            WHERE user_id = $1 AND company_id = $2 AND month = $3
            "#,
        )
        .bind(user_id)
        .bind(company_id)
        .bind(month)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| UsageCounter {
            user_id: r.user_id,
            company_id: r.company_id,
            month: r.month,
            invoices_created: r.invoices_created,
        }))
    }

    #[instrument(skip(self))]
    async fn increment_usage(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        month: &str,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO usage_counters (user_id, company_id, month, invoices_created)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (user_id, company_id, month)
            DO UPDATE SET invoices_created = usage_counters.invoices_created + 1
            "#,
        )
        .bind(user_id)
        .bind(company_id)
        .bind(month)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_employees(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE company_id = $1")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn count_team_members(&self, company_id: Uuid) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.max(0) as u64)
    }
}
