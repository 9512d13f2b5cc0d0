//! Document lifecycle integration tests: create, update, list, delete.

mod common;

use common::{line, today, TestContext};
use document_engine::models::{
    CreateExchangeRate, CurrencyCode, DocumentStatus, DocumentType, InvoiceStatus,
    ListDocumentsFilter, QuotationStatus, RateSource, UpdateDocument,
};
use document_engine::EngineError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn first_invoice_gets_number_one_and_draft_status() {
    let ctx = TestContext::new().await;

    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(2), dec!(100), dec!(15)), line(dec!(1), dec!(50), dec!(15))],
        )
        .await
        .unwrap();

    assert_eq!(created.document.number, "INV-0001");
    assert_eq!(
        created.document.status,
        DocumentStatus::Invoice(InvoiceStatus::Draft)
    );
    assert_eq!(created.document.subtotal_fx, dec!(250.00));
    assert_eq!(created.document.vat_fx, dec!(37.50));
    assert_eq!(created.document.total_fx, dec!(287.50));
    assert_eq!(created.items.len(), 2);
}

#[tokio::test]
async fn base_currency_document_has_rate_one_and_equal_total_sets() {
    let ctx = TestContext::new().await;

    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(3), dec!(19.99), dec!(20))],
        )
        .await
        .unwrap();

    assert_eq!(created.document.fx_rate, Decimal::ONE);
    assert_eq!(created.document.subtotal, created.document.subtotal_fx);
    assert_eq!(created.document.vat, created.document.vat_fx);
    assert_eq!(created.document.total, created.document.total_fx);
}

#[tokio::test]
async fn foreign_currency_document_resolves_the_stored_rate() {
    let ctx = TestContext::new().await;
    ctx.engine
        .add_exchange_rate(
            ctx.ctx(),
            CreateExchangeRate {
                quote_currency: CurrencyCode::Usd,
                rate: dec!(0.92),
                effective_date: today(),
                source: RateSource::Provider,
            },
        )
        .await
        .unwrap();

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.currency = CurrencyCode::Usd;
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();

    assert_eq!(created.document.fx_rate, dec!(0.92));
    assert_eq!(created.document.subtotal_fx, dec!(100.00));
    assert_eq!(created.document.subtotal, dec!(92.00));
}

#[tokio::test]
async fn missing_rate_defaults_to_one() {
    let ctx = TestContext::new().await;

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.currency = CurrencyCode::Usd;
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();

    assert_eq!(created.document.fx_rate, Decimal::ONE);
    assert_eq!(created.document.subtotal, created.document.subtotal_fx);
}

#[tokio::test]
async fn manual_rate_on_a_base_currency_document_must_be_one() {
    let ctx = TestContext::new().await;

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.fx_rate = Some(dec!(0.85));
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.fx_rate = Some(dec!(-1));
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.fx_rate = Some(Decimal::ONE);
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();
    assert_eq!(created.document.fx_rate, Decimal::ONE);
}

#[tokio::test]
async fn manual_rate_overrides_the_stored_rate() {
    let ctx = TestContext::new().await;
    ctx.engine
        .add_exchange_rate(
            ctx.ctx(),
            CreateExchangeRate {
                quote_currency: CurrencyCode::Usd,
                rate: dec!(0.92),
                effective_date: today(),
                source: RateSource::Provider,
            },
        )
        .await
        .unwrap();

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.currency = CurrencyCode::Usd;
    input.fx_rate = Some(dec!(0.85));
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();

    assert_eq!(created.document.fx_rate, dec!(0.85));
    assert_eq!(created.document.subtotal, dec!(85.00));
}

#[tokio::test]
async fn blank_lines_are_not_persisted() {
    let ctx = TestContext::new().await;

    let blank = line(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    let blank = document_engine::models::LineItemInput {
        description: "  ".to_string(),
        ..blank
    };
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(1), dec!(10), dec!(0)), blank],
        )
        .await
        .unwrap();

    assert_eq!(created.items.len(), 1);
    assert_eq!(created.document.total_fx, dec!(10.00));
}

#[tokio::test]
async fn invoice_without_a_client_party_is_rejected() {
    let ctx = TestContext::new().await;

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.party_id = None;
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.party_id = Some(ctx.supplier_id);
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn purchase_party_is_optional_but_must_be_a_supplier() {
    let ctx = TestContext::new().await;

    let mut input = ctx.new_document(DocumentType::Purchase);
    input.party_id = None;
    ctx.engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(5), dec!(0))])
        .await
        .unwrap();

    let mut input = ctx.new_document(DocumentType::Purchase);
    input.party_id = Some(ctx.client_id);
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn disabled_currency_is_rejected() {
    let ctx = TestContext::new().await;

    let mut input = ctx.new_document(DocumentType::Invoice);
    input.currency = CurrencyCode::Gbp;
    let err = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn line_item_failure_rolls_back_the_document_header() {
    let ctx = TestContext::new().await;

    ctx.store.fail_next_line_item_insert();
    let err = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Storage(_)));
    assert_eq!(ctx.store.document_count(), 0);

    // The failed attempt must not burn a sequence number.
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    assert_eq!(created.document.number, "INV-0001");
}

#[tokio::test]
async fn usage_write_failure_does_not_fail_the_invoice() {
    let ctx = TestContext::new().await;

    ctx.store.fail_next_usage_increment();
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    assert_eq!(created.document.number, "INV-0001");
}

#[tokio::test]
async fn updating_items_replaces_the_full_set_and_recomputes_totals() {
    let ctx = TestContext::new().await;
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(2), dec!(100), dec!(15)), line(dec!(1), dec!(50), dec!(15))],
        )
        .await
        .unwrap();

    let updated = ctx
        .engine
        .update_document(
            ctx.ctx(),
            created.document.document_id,
            UpdateDocument::default(),
            Some(vec![line(dec!(1), dec!(40), dec!(0))]),
        )
        .await
        .unwrap();

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.document.total_fx, dec!(40.00));
}

#[tokio::test]
async fn items_are_locked_once_the_document_is_sent() {
    let ctx = TestContext::new().await;
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    ctx.engine
        .update_status(
            ctx.ctx(),
            created.document.document_id,
            DocumentStatus::Invoice(InvoiceStatus::Sent),
        )
        .await
        .unwrap();

    let err = ctx
        .engine
        .update_document(
            ctx.ctx(),
            created.document.document_id,
            UpdateDocument::default(),
            Some(vec![line(dec!(1), dec!(99), dec!(0))]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StateConflict(_)));
}

#[tokio::test]
async fn purchase_items_are_locked_from_creation() {
    let ctx = TestContext::new().await;
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Purchase),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();

    let err = ctx
        .engine
        .update_document(
            ctx.ctx(),
            created.document.document_id,
            UpdateDocument::default(),
            Some(vec![line(dec!(2), dec!(10), dec!(0))]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StateConflict(_)));

    // The header is still patchable while the purchase is a draft.
    let updated = ctx
        .engine
        .update_document(
            ctx.ctx(),
            created.document.document_id,
            UpdateDocument {
                notes: Some("received with delivery".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(updated.document.notes.as_deref(), Some("received with delivery"));
}

#[tokio::test]
async fn patching_the_rate_recomputes_from_stored_items() {
    let ctx = TestContext::new().await;
    let mut input = ctx.new_document(DocumentType::Quotation);
    input.currency = CurrencyCode::Usd;
    input.fx_rate = Some(dec!(0.9));
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();
    assert_eq!(created.document.subtotal, dec!(90.00));

    let updated = ctx
        .engine
        .update_document(
            ctx.ctx(),
            created.document.document_id,
            UpdateDocument {
                fx_rate: Some(dec!(0.8)),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(updated.document.subtotal_fx, dec!(100.00));
    assert_eq!(updated.document.subtotal, dec!(80.00));
    assert_eq!(updated.items[0].subtotal, dec!(80.00));
}

#[tokio::test]
async fn invalid_transition_is_a_state_conflict() {
    let ctx = TestContext::new().await;
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();

    let err = ctx
        .engine
        .update_status(
            ctx.ctx(),
            created.document.document_id,
            DocumentStatus::Invoice(InvoiceStatus::Paid),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StateConflict(_)));
}

#[tokio::test]
async fn delete_removes_document_and_items() {
    let ctx = TestContext::new().await;
    let created = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();

    ctx.engine
        .delete_document(ctx.ctx(), created.document.document_id)
        .await
        .unwrap();

    let err = ctx
        .engine
        .get_document(ctx.ctx(), created.document.document_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn listing_filters_by_status_and_party() {
    let ctx = TestContext::new().await;
    let first = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    ctx.engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(1), dec!(20), dec!(0))],
        )
        .await
        .unwrap();
    ctx.engine
        .update_status(
            ctx.ctx(),
            first.document.document_id,
            DocumentStatus::Quotation(QuotationStatus::Sent),
        )
        .await
        .unwrap();

    let all = ctx
        .engine
        .list_documents(
            ctx.ctx(),
            DocumentType::Quotation,
            &ListDocumentsFilter::default(),
        )
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let sent = ctx
        .engine
        .list_documents(
            ctx.ctx(),
            DocumentType::Quotation,
            &ListDocumentsFilter {
                status: Some(DocumentStatus::Quotation(QuotationStatus::Sent)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].document_id, first.document.document_id);

    let none = ctx
        .engine
        .list_documents(
            ctx.ctx(),
            DocumentType::Quotation,
            &ListDocumentsFilter {
                party_id: Some(ctx.supplier_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn each_type_draws_from_its_own_sequence() {
    let ctx = TestContext::new().await;

    let quote = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Quotation),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    let invoice = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Invoice),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();
    let purchase = ctx
        .engine
        .create_document(
            ctx.ctx(),
            ctx.new_document(DocumentType::Purchase),
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();

    assert_eq!(quote.document.number, "QUO-0001");
    assert_eq!(invoice.document.number, "INV-0001");
    assert_eq!(purchase.document.number, "PUR-0001");
}
