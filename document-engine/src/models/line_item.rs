//! Line item model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A persisted line on a document.
///
/// Monetary values are stored in both currencies, with the FX rate
/// applied per line so a reader recomputing from the persisted rows
/// arrives at the persisted document totals.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub line_item_id: Uuid,
    pub document_id: Uuid,
    pub company_id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// VAT percentage, 0-100, fractional allowed.
    pub vat_rate: Decimal,
    pub product_id: Option<Uuid>,
    pub account_id: Option<Uuid>,
    pub sort_order: i32,
    pub subtotal_fx: Decimal,
    pub vat_fx: Decimal,
    pub total_fx: Decimal,
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Caller input for one line. Unit price is in the document currency.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub vat_rate: Decimal,
    pub product_id: Option<Uuid>,
    pub account_id: Option<Uuid>,
}

impl LineItemInput {
    /// Zero-filled blank lines are excluded from sums and persistence.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty() && self.quantity.is_zero() && self.unit_price.is_zero()
    }
}
