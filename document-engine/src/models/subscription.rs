//! Subscription plans, limits, and usage counters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Subscription status as reported by the subscription provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(SubscriptionStatus::Trial),
            "active" => Some(SubscriptionStatus::Active),
            "past_due" => Some(SubscriptionStatus::PastDue),
            "canceled" => Some(SubscriptionStatus::Canceled),
            _ => None,
        }
    }
}

/// Subscription plan tier. `Expired` is the all-zero fallback resolved
/// for canceled, missing, or trial-lapsed subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Starter,
    Professional,
    Unlimited,
    Expired,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Starter => "starter",
            PlanTier::Professional => "professional",
            PlanTier::Unlimited => "unlimited",
            PlanTier::Expired => "expired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "starter" => Some(PlanTier::Starter),
            "professional" => Some(PlanTier::Professional),
            "unlimited" => Some(PlanTier::Unlimited),
            "expired" => Some(PlanTier::Expired),
            _ => None,
        }
    }

    /// Ceilings and feature flags for the tier.
    pub fn limits(&self) -> PlanLimits {
        match self {
            PlanTier::Starter => PlanLimits {
                companies: Limit::Max(1),
                invoices_per_month: Limit::Max(100),
                employees: Limit::Max(5),
                team_members: Limit::Max(2),
                inventory: false,
                multi_currency: false,
            },
            PlanTier::Professional => PlanLimits {
                companies: Limit::Max(5),
                invoices_per_month: Limit::Max(1000),
                employees: Limit::Max(50),
                team_members: Limit::Max(10),
                inventory: true,
                multi_currency: true,
            },
            PlanTier::Unlimited => PlanLimits {
                companies: Limit::Unlimited,
                invoices_per_month: Limit::Unlimited,
                employees: Limit::Unlimited,
                team_members: Limit::Unlimited,
                inventory: true,
                multi_currency: true,
            },
            // Zero ceilings: every plan-limited action is blocked.
            PlanTier::Expired => PlanLimits {
                companies: Limit::Max(0),
                invoices_per_month: Limit::Max(0),
                employees: Limit::Max(0),
                team_members: Limit::Max(0),
                inventory: false,
                multi_currency: false,
            },
        }
    }
}

/// A count ceiling; zero blocks the action entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Limit {
    Unlimited,
    Max(u32),
}

impl Limit {
    pub fn allows(&self, current: u64) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::Max(ceiling) => current < u64::from(*ceiling),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => f.write_str("unlimited"),
            Limit::Max(ceiling) => write!(f, "{ceiling}"),
        }
    }
}

/// Per-plan ceilings and feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub companies: Limit,
    pub invoices_per_month: Limit,
    pub employees: Limit,
    pub team_members: Limit,
    pub inventory: bool,
    pub multi_currency: bool,
}

/// Plan-limited action kinds the quota guard decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Company,
    InvoicePerMonth,
    Employee,
    TeamMember,
}

impl LimitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitKind::Company => "company",
            LimitKind::InvoicePerMonth => "invoice-per-month",
            LimitKind::Employee => "employee",
            LimitKind::TeamMember => "team-member",
        }
    }
}

/// Boolean plan features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFeature {
    Inventory,
    MultiCurrency,
}

/// The user's subscription record as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: Uuid,
    pub status: SubscriptionStatus,
    pub plan: PlanTier,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

/// Monthly invoice counter per (user, company, calendar month).
///
/// Monotonic: incremented on invoice creation, never decremented by
/// this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageCounter {
    pub user_id: Uuid,
    pub company_id: Uuid,
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    pub invoices_created: i64,
}

/// Calendar-month key for usage counters.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
