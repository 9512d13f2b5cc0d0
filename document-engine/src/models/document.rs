//! Document model: quotations, invoices, and purchases.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::CurrencyCode;

/// Document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Quotation,
    Invoice,
    Purchase,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Quotation => "quotation",
            DocumentType::Invoice => "invoice",
            DocumentType::Purchase => "purchase",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quotation" => Some(DocumentType::Quotation),
            "invoice" => Some(DocumentType::Invoice),
            "purchase" => Some(DocumentType::Purchase),
            _ => None,
        }
    }

    /// Canonical tag used in human-readable document numbers.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            DocumentType::Quotation => "QUO",
            DocumentType::Invoice => "INV",
            DocumentType::Purchase => "PUR",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quotation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
    Converted,
}

/// Invoice lifecycle. `Paid` is only ever set by the payment subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Purchase lifecycle: invoice-shaped, minus the quotation-only states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Type-specific document status. The tagging makes an invalid
/// (type, status) pair unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Quotation(QuotationStatus),
    Invoice(InvoiceStatus),
    Purchase(PurchaseStatus),
}

impl DocumentStatus {
    pub fn doc_type(&self) -> DocumentType {
        match self {
            DocumentStatus::Quotation(_) => DocumentType::Quotation,
            DocumentStatus::Invoice(_) => DocumentType::Invoice,
            DocumentStatus::Purchase(_) => DocumentType::Purchase,
        }
    }

    /// Initial status on creation.
    pub fn initial(doc_type: DocumentType) -> Self {
        match doc_type {
            DocumentType::Quotation => DocumentStatus::Quotation(QuotationStatus::Draft),
            DocumentType::Invoice => DocumentStatus::Invoice(InvoiceStatus::Draft),
            DocumentType::Purchase => DocumentStatus::Purchase(PurchaseStatus::Draft),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Quotation(QuotationStatus::Draft) => "draft",
            DocumentStatus::Quotation(QuotationStatus::Sent) => "sent",
            DocumentStatus::Quotation(QuotationStatus::Accepted) => "accepted",
            DocumentStatus::Quotation(QuotationStatus::Declined) => "declined",
            DocumentStatus::Quotation(QuotationStatus::Expired) => "expired",
            DocumentStatus::Quotation(QuotationStatus::Converted) => "converted",
            DocumentStatus::Invoice(InvoiceStatus::Draft) => "draft",
            DocumentStatus::Invoice(InvoiceStatus::Sent) => "sent",
            DocumentStatus::Invoice(InvoiceStatus::Paid) => "paid",
            DocumentStatus::Invoice(InvoiceStatus::Overdue) => "overdue",
            DocumentStatus::Purchase(PurchaseStatus::Draft) => "draft",
            DocumentStatus::Purchase(PurchaseStatus::Sent) => "sent",
            DocumentStatus::Purchase(PurchaseStatus::Paid) => "paid",
            DocumentStatus::Purchase(PurchaseStatus::Overdue) => "overdue",
        }
    }

    /// Parse a stored status word in the context of its document type.
    pub fn parse(doc_type: DocumentType, s: &str) -> Option<Self> {
        let status = match (doc_type, s) {
            (DocumentType::Quotation, "draft") => DocumentStatus::Quotation(QuotationStatus::Draft),
            (DocumentType::Quotation, "sent") => DocumentStatus::Quotation(QuotationStatus::Sent),
            (DocumentType::Quotation, "accepted") => {
                DocumentStatus::Quotation(QuotationStatus::Accepted)
            }
            (DocumentType::Quotation, "declined") => {
                DocumentStatus::Quotation(QuotationStatus::Declined)
            }
            (DocumentType::Quotation, "expired") => {
                DocumentStatus::Quotation(QuotationStatus::Expired)
            }
            (DocumentType::Quotation, "converted") => {
                DocumentStatus::Quotation(QuotationStatus::Converted)
            }
            (DocumentType::Invoice, "draft") => DocumentStatus::Invoice(InvoiceStatus::Draft),
            (DocumentType::Invoice, "sent") => DocumentStatus::Invoice(InvoiceStatus::Sent),
            (DocumentType::Invoice, "paid") => DocumentStatus::Invoice(InvoiceStatus::Paid),
            (DocumentType::Invoice, "overdue") => DocumentStatus::Invoice(InvoiceStatus::Overdue),
            (DocumentType::Purchase, "draft") => DocumentStatus::Purchase(PurchaseStatus::Draft),
            (DocumentType::Purchase, "sent") => DocumentStatus::Purchase(PurchaseStatus::Sent),
            (DocumentType::Purchase, "paid") => DocumentStatus::Purchase(PurchaseStatus::Paid),
            (DocumentType::Purchase, "overdue") => {
                DocumentStatus::Purchase(PurchaseStatus::Overdue)
            }
            _ => return None,
        };
        Some(status)
    }

    /// Whether line items may still be replaced in this status.
    ///
    /// Purchases represent an already-received supplier document, so
    /// their items are locked from creation.
    pub fn items_editable(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Quotation(QuotationStatus::Draft)
                | DocumentStatus::Invoice(InvoiceStatus::Draft)
        )
    }
}

impl Serialize for DocumentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary document.
///
/// Carries two parallel totals: `*_fx` in the document currency and the
/// unsuffixed set in the company's base currency. When the document is
/// denominated in the base currency, `fx_rate == 1` and the sets are
/// numerically identical.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub document_id: Uuid,
    pub company_id: Uuid,
    pub doc_type: DocumentType,
    pub number: String,
    pub party_id: Option<Uuid>,
    pub status: DocumentStatus,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub currency: CurrencyCode,
    pub fx_rate: Decimal,
    pub fx_rate_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub subtotal_fx: Decimal,
    pub vat_fx: Decimal,
    pub total_fx: Decimal,
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
    /// Back-reference set when a quotation has been converted.
    pub converted_invoice_id: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

/// Caller-assembled draft for a new document.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub doc_type: DocumentType,
    pub party_id: Option<Uuid>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub currency: CurrencyCode,
    /// Manual rate override; when absent the engine resolves one from
    /// the stored rates.
    pub fx_rate: Option<Decimal>,
    pub fx_rate_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

/// Header patch. `None` fields are left unchanged; the document currency
/// is fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocument {
    pub party_id: Option<Uuid>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub fx_rate: Option<Decimal>,
    pub fx_rate_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

/// Filter parameters for listing documents of one type.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsFilter {
    pub status: Option<DocumentStatus>,
    pub party_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
