//! Company model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CurrencyCode;

/// A company owned by a user.
///
/// The base currency is immutable once any document exists; the enabled
/// set always contains the base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company_id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub base_currency: CurrencyCode,
    pub enabled_currencies: Vec<CurrencyCode>,
    pub created_utc: DateTime<Utc>,
}

impl Company {
    pub fn is_currency_enabled(&self, currency: CurrencyCode) -> bool {
        currency == self.base_currency || self.enabled_currencies.contains(&currency)
    }
}

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub owner_user_id: Uuid,
    pub name: String,
    pub base_currency: CurrencyCode,
}
