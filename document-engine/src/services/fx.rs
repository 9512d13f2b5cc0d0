//! Currency conversion between a document currency and the company's
//! base currency.
//!
//! All monetary arithmetic is fixed-precision decimal: 2 decimal places
//! for currency amounts, 6 for FX rates. Summed binary floating-point
//! drift is the classic accounting defect; it is ruled out here by
//! construction.

use chrono::NaiveDate;
use engine_core::error::EngineError;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CurrencyCode, ExchangeRate};

/// Decimal places kept for currency amounts.
pub const AMOUNT_DP: u32 = 2;
/// Decimal places kept for FX rates.
pub const RATE_DP: u32 = 6;

/// Conversion direction relative to the document's FX rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    DocumentToBase,
    BaseToDocument,
}

/// Round a currency amount to the configured precision.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an FX rate to the configured precision.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an amount across the document/base currency boundary.
///
/// `fx_rate` is the document-currency to base-currency factor; rate 1
/// is a no-op apart from amount rounding.
pub fn convert(amount: Decimal, fx_rate: Decimal, direction: Direction) -> Result<Decimal, EngineError> {
    if fx_rate <= Decimal::ZERO {
        return Err(EngineError::validation("exchange rate must be positive"));
    }
    if fx_rate == Decimal::ONE {
        return Ok(round_amount(amount));
    }
    let converted = match direction {
        Direction::DocumentToBase => amount * fx_rate,
        Direction::BaseToDocument => amount / fx_rate,
    };
    Ok(round_amount(converted))
}

/// Resolve the most recent rate for `quote` with `effective_date <= as_of`.
///
/// `None` is not an error: a missing rate is a normal cold-start
/// condition and the caller may supply a manual rate instead.
pub fn resolve_rate<'a>(
    rates: &'a [ExchangeRate],
    quote: CurrencyCode,
    as_of: NaiveDate,
) -> Option<&'a ExchangeRate> {
    rates
        .iter()
        .filter(|r| r.quote_currency == quote && r.effective_date <= as_of)
        .max_by_key(|r| (r.effective_date, r.created_utc))
}
