//! Currency codes the engine can denominate documents in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code, closed to the set the application supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Chf,
    Sek,
    Nok,
    Dkk,
    Pln,
    Czk,
    Huf,
    Ron,
    Bgn,
    Try,
    Inr,
    Cny,
    Jpy,
    Aud,
    Cad,
    Nzd,
    Zar,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Nok => "NOK",
            CurrencyCode::Dkk => "DKK",
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Czk => "CZK",
            CurrencyCode::Huf => "HUF",
            CurrencyCode::Ron => "RON",
            CurrencyCode::Bgn => "BGN",
            CurrencyCode::Try => "TRY",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Nzd => "NZD",
            CurrencyCode::Zar => "ZAR",
        }
    }

    /// Parse a code, case-insensitively. Unknown codes are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(CurrencyCode::Usd),
            "EUR" => Some(CurrencyCode::Eur),
            "GBP" => Some(CurrencyCode::Gbp),
            "CHF" => Some(CurrencyCode::Chf),
            "SEK" => Some(CurrencyCode::Sek),
            "NOK" => Some(CurrencyCode::Nok),
            "DKK" => Some(CurrencyCode::Dkk),
            "PLN" => Some(CurrencyCode::Pln),
            "CZK" => Some(CurrencyCode::Czk),
            "HUF" => Some(CurrencyCode::Huf),
            "RON" => Some(CurrencyCode::Ron),
            "BGN" => Some(CurrencyCode::Bgn),
            "TRY" => Some(CurrencyCode::Try),
            "INR" => Some(CurrencyCode::Inr),
            "CNY" => Some(CurrencyCode::Cny),
            "JPY" => Some(CurrencyCode::Jpy),
            "AUD" => Some(CurrencyCode::Aud),
            "CAD" => Some(CurrencyCode::Cad),
            "NZD" => Some(CurrencyCode::Nzd),
            "ZAR" => Some(CurrencyCode::Zar),
            _ => None,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
