//! Party model: clients and suppliers, read-only from this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    Client,
    Supplier,
}

impl PartyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyKind::Client => "client",
            PartyKind::Supplier => "supplier",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(PartyKind::Client),
            "supplier" => Some(PartyKind::Supplier),
            _ => None,
        }
    }
}

/// A counterparty a document is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub party_id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub kind: PartyKind,
    pub email: Option<String>,
    pub created_utc: DateTime<Utc>,
}
