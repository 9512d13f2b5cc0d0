//! Company currency administration and exchange rate tests.

mod common;

use chrono::Duration;
use common::{line, today, TestContext};
use document_engine::models::{CreateExchangeRate, CurrencyCode, DocumentType, RateSource};
use document_engine::EngineError;
use rust_decimal_macros::dec;

#[tokio::test]
async fn currencies_can_be_enabled_and_disabled_while_unused() {
    let ctx = TestContext::new().await;

    let company = ctx
        .engine
        .enable_currency(ctx.ctx(), CurrencyCode::Gbp)
        .await
        .unwrap();
    assert!(company.is_currency_enabled(CurrencyCode::Gbp));

    let company = ctx
        .engine
        .disable_currency(ctx.ctx(), CurrencyCode::Gbp)
        .await
        .unwrap();
    assert!(!company.is_currency_enabled(CurrencyCode::Gbp));
}

#[tokio::test]
async fn the_base_currency_cannot_be_disabled() {
    let ctx = TestContext::new().await;

    let err = ctx
        .engine
        .disable_currency(ctx.ctx(), CurrencyCode::Eur)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn a_currency_in_use_cannot_be_disabled() {
    let ctx = TestContext::new().await;
    let mut input = ctx.new_document(DocumentType::Quotation);
    input.currency = CurrencyCode::Usd;
    input.fx_rate = Some(dec!(0.9));
    ctx.engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(10), dec!(0))])
        .await
        .unwrap();

    let err = ctx
        .engine
        .disable_currency(ctx.ctx(), CurrencyCode::Usd)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StateConflict(_)));
}

#[tokio::test]
async fn the_base_currency_is_fixed_once_documents_exist() {
    let ctx = TestContext::new().await;

    let company = ctx
        .engine
        .set_base_currency(ctx.ctx(), CurrencyCode::Chf)
        .await
        .unwrap();
    assert_eq!(company.base_currency, CurrencyCode::Chf);

    ctx.engine
        .create_document(
            ctx.ctx(),
            {
                let mut input = ctx.new_document(DocumentType::Quotation);
                input.currency = CurrencyCode::Chf;
                input
            },
            vec![line(dec!(1), dec!(10), dec!(0))],
        )
        .await
        .unwrap();

    let err = ctx
        .engine
        .set_base_currency(ctx.ctx(), CurrencyCode::Eur)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StateConflict(_)));
}

#[tokio::test]
async fn rates_must_be_positive_and_against_a_foreign_currency() {
    let ctx = TestContext::new().await;

    let err = ctx
        .engine
        .add_exchange_rate(
            ctx.ctx(),
            CreateExchangeRate {
                quote_currency: CurrencyCode::Usd,
                rate: dec!(0),
                effective_date: today(),
                source: RateSource::Manual,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let err = ctx
        .engine
        .add_exchange_rate(
            ctx.ctx(),
            CreateExchangeRate {
                quote_currency: CurrencyCode::Eur,
                rate: dec!(1.1),
                effective_date: today(),
                source: RateSource::Manual,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn the_most_recent_rate_on_or_before_the_issue_date_wins() {
    let ctx = TestContext::new().await;
    for (days_ago, rate) in [(10i64, dec!(0.95)), (2, dec!(0.92)), (0, dec!(0.90))] {
        ctx.engine
            .add_exchange_rate(
                ctx.ctx(),
                CreateExchangeRate {
                    quote_currency: CurrencyCode::Usd,
                    rate,
                    effective_date: today() - Duration::days(days_ago),
                    source: RateSource::Provider,
                },
            )
            .await
            .unwrap();
    }

    // Issued five days ago: the ten-day-old rate applies, not the
    // newer ones.
    let mut input = ctx.new_document(DocumentType::Invoice);
    input.currency = CurrencyCode::Usd;
    input.issue_date = today() - Duration::days(5);
    let created = ctx
        .engine
        .create_document(ctx.ctx(), input, vec![line(dec!(1), dec!(100), dec!(0))])
        .await
        .unwrap();

    assert_eq!(created.document.fx_rate, dec!(0.95));
    assert_eq!(
        created.document.fx_rate_date,
        Some(today() - Duration::days(10))
    );
}
