//! Lifecycle state machine: valid status transitions per document type.

use engine_core::error::EngineError;

use crate::models::{
    Document, DocumentStatus, DocumentType, InvoiceStatus, PurchaseStatus, QuotationStatus,
};

/// Validate a transition requested through the generic status update.
///
/// `paid` and `converted` are never reachable this way: payment is
/// recorded by the payment subsystem (which supports partial payments),
/// and conversion goes through the dedicated quotation-to-invoice flow.
pub fn validate_transition(from: DocumentStatus, to: DocumentStatus) -> Result<(), EngineError> {
    if from.doc_type() != to.doc_type() {
        return Err(EngineError::validation(format!(
            "status '{}' does not belong to a {}",
            to,
            from.doc_type()
        )));
    }

    match to {
        DocumentStatus::Invoice(InvoiceStatus::Paid)
        | DocumentStatus::Purchase(PurchaseStatus::Paid) => {
            return Err(EngineError::state_conflict(
                "a document cannot be marked paid directly; record a payment through the payment flow instead",
            ));
        }
        DocumentStatus::Quotation(QuotationStatus::Converted) => {
            return Err(EngineError::state_conflict(
                "a quotation cannot be marked converted directly; use the convert-to-invoice operation",
            ));
        }
        _ => {}
    }

    let allowed = matches!(
        (from, to),
        (
            DocumentStatus::Quotation(QuotationStatus::Draft),
            DocumentStatus::Quotation(QuotationStatus::Sent)
        ) | (
            DocumentStatus::Quotation(QuotationStatus::Sent),
            DocumentStatus::Quotation(
                QuotationStatus::Accepted | QuotationStatus::Declined | QuotationStatus::Expired
            )
        ) | (
            DocumentStatus::Invoice(InvoiceStatus::Draft),
            DocumentStatus::Invoice(InvoiceStatus::Sent)
        ) | (
            DocumentStatus::Invoice(InvoiceStatus::Sent),
            DocumentStatus::Invoice(InvoiceStatus::Overdue)
        ) | (
            DocumentStatus::Purchase(PurchaseStatus::Draft),
            DocumentStatus::Purchase(PurchaseStatus::Sent)
        ) | (
            DocumentStatus::Purchase(PurchaseStatus::Sent),
            DocumentStatus::Purchase(PurchaseStatus::Overdue)
        )
    );

    if allowed {
        Ok(())
    } else {
        Err(EngineError::state_conflict(format!(
            "cannot move a {} from '{}' to '{}'",
            from.doc_type(),
            from,
            to
        )))
    }
}

/// Lifecycle lock: items are immutable once the document leaves its
/// editable status (a sent invoice's content must match what the client
/// received; purchases are locked from creation).
pub fn ensure_items_editable(status: DocumentStatus) -> Result<(), EngineError> {
    if status.items_editable() {
        Ok(())
    } else {
        Err(EngineError::state_conflict(format!(
            "line items on a {} in status '{}' are locked",
            status.doc_type(),
            status
        )))
    }
}

/// Deletion guard: a converted quotation is the audit trail for its
/// invoice and must not be deleted.
pub fn ensure_deletable(document: &Document) -> Result<(), EngineError> {
    if document.status == DocumentStatus::Quotation(QuotationStatus::Converted) {
        return Err(EngineError::state_conflict(
            "a converted quotation cannot be deleted",
        ));
    }
    Ok(())
}

/// Conversion guard: only an accepted, not-yet-converted quotation may
/// spawn an invoice.
pub fn ensure_convertible(document: &Document) -> Result<(), EngineError> {
    if document.doc_type != DocumentType::Quotation {
        return Err(EngineError::validation(
            "only quotations can be converted to invoices",
        ));
    }
    if document.converted_invoice_id.is_some()
        || document.status == DocumentStatus::Quotation(QuotationStatus::Converted)
    {
        return Err(EngineError::state_conflict(
            "this quotation has already been converted",
        ));
    }
    if document.status != DocumentStatus::Quotation(QuotationStatus::Accepted) {
        return Err(EngineError::state_conflict(format!(
            "only an accepted quotation can be converted (current status: '{}')",
            document.status
        )));
    }
    Ok(())
}
