//! Domain models for the document engine.

mod company;
mod currency;
mod document;
mod exchange_rate;
mod line_item;
mod party;
mod subscription;

pub use company::{Company, CreateCompany};
pub use currency::CurrencyCode;
pub use document::{
    Document, DocumentStatus, DocumentType, InvoiceStatus, ListDocumentsFilter, NewDocument,
    PurchaseStatus, QuotationStatus, UpdateDocument,
};
pub use exchange_rate::{CreateExchangeRate, ExchangeRate, RateSource};
pub use line_item::{LineItem, LineItemInput};
pub use party::{Party, PartyKind};
pub use subscription::{
    month_key, Limit, LimitKind, PlanFeature, PlanLimits, PlanTier, Subscription,
    SubscriptionStatus, UsageCounter,
};
