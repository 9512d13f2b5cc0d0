//! Exchange rate model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CurrencyCode;

/// Where a rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Manual,
    Provider,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Manual => "manual",
            RateSource::Provider => "provider",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(RateSource::Manual),
            "provider" => Some(RateSource::Provider),
            _ => None,
        }
    }
}

/// One timestamped rate for a (base, quote) pair.
///
/// Multiple rates per pair are allowed; lookup resolves the most recent
/// rate with `effective_date <=` the target date. Invariant: rate > 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub rate_id: Uuid,
    pub company_id: Uuid,
    pub base_currency: CurrencyCode,
    pub quote_currency: CurrencyCode,
    pub rate: Decimal,
    pub effective_date: NaiveDate,
    pub source: RateSource,
    pub created_utc: DateTime<Utc>,
}

/// Input for recording an exchange rate.
#[derive(Debug, Clone)]
pub struct CreateExchangeRate {
    pub quote_currency: CurrencyCode,
    pub rate: Decimal,
    pub effective_date: NaiveDate,
    pub source: RateSource,
}
