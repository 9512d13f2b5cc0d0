//! Quota guard: admits or rejects plan-limited actions.

use chrono::{DateTime, Utc};
use engine_core::error::EngineError;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::models::{month_key, LimitKind, PlanFeature, PlanTier, Subscription, SubscriptionStatus};
use crate::services::store::Store;

/// Outcome of a limit check. A denial always carries a human-readable
/// reason; recovery is a plan upgrade, never a retry.
#[derive(Debug, Clone)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl QuotaDecision {
    fn allow() -> Self {
        QuotaDecision {
            allowed: true,
            reason: None,
        }
    }

    fn deny(reason: String) -> Self {
        QuotaDecision {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Resolve the effective plan from the subscription record.
///
/// Trials are time-boxed by `trial_ends_at`; `active` and `past_due`
/// retain plan entitlements; everything else resolves to the all-zero
/// expired plan.
pub fn effective_plan(subscription: Option<&Subscription>, now: DateTime<Utc>) -> PlanTier {
    let Some(sub) = subscription else {
        return PlanTier::Expired;
    };
    match sub.status {
        SubscriptionStatus::Active | SubscriptionStatus::PastDue => sub.plan,
        SubscriptionStatus::Trial => match sub.trial_ends_at {
            Some(ends_at) if ends_at > now => sub.plan,
            // A trial without an end timestamp is treated as lapsed.
            _ => PlanTier::Expired,
        },
        SubscriptionStatus::Canceled => PlanTier::Expired,
    }
}

pub struct QuotaGuard {
    store: Arc<dyn Store>,
    admin_user_ids: HashSet<Uuid>,
}

impl QuotaGuard {
    pub fn new(store: Arc<dyn Store>, admin_user_ids: &[Uuid]) -> Self {
        QuotaGuard {
            store,
            admin_user_ids: admin_user_ids.iter().copied().collect(),
        }
    }

    /// Decide whether a plan-limited action may proceed.
    ///
    /// Resolution order: admin allow-list, effective plan, usage versus
    /// ceiling (unlimited ceilings always pass).
    #[instrument(skip(self), fields(kind = kind.as_str(), user_id = %user_id, company_id = %company_id))]
    pub async fn check_limit(
        &self,
        kind: LimitKind,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<QuotaDecision, EngineError> {
        if self.admin_user_ids.contains(&user_id) {
            return Ok(QuotaDecision::allow());
        }

        let subscription = self.store.get_subscription(user_id).await?;
        let plan = effective_plan(subscription.as_ref(), Utc::now());
        let limits = plan.limits();

        let (ceiling, used) = match kind {
            LimitKind::Company => (
                limits.companies,
                self.store.count_companies(user_id).await?,
            ),
            LimitKind::InvoicePerMonth => {
                let month = month_key(Utc::now().date_naive());
                let used = self
                    .store
                    .get_usage(user_id, company_id, &month)
                    .await?
                    .map_or(0, |counter| counter.invoices_created.max(0) as u64);
                (limits.invoices_per_month, used)
            }
            LimitKind::Employee => (
                limits.employees,
                self.store.count_employees(company_id).await?,
            ),
            LimitKind::TeamMember => (
                limits.team_members,
                self.store.count_team_members(company_id).await?,
            ),
        };

        if ceiling.allows(used) {
            Ok(QuotaDecision::allow())
        } else {
            Ok(QuotaDecision::deny(format!(
                "{} limit reached on the {} plan ({} of {})",
                kind.as_str(),
                plan.as_str(),
                used,
                ceiling
            )))
        }
    }

    /// Whether the user's effective plan includes a boolean feature.
    /// Admins always pass.
    pub async fn feature_enabled(
        &self,
        user_id: Uuid,
        feature: PlanFeature,
    ) -> Result<bool, EngineError> {
        if self.admin_user_ids.contains(&user_id) {
            return Ok(true);
        }
        let subscription = self.store.get_subscription(user_id).await?;
        let limits = effective_plan(subscription.as_ref(), Utc::now()).limits();
        Ok(match feature {
            PlanFeature::Inventory => limits.inventory,
            PlanFeature::MultiCurrency => limits.multi_currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn subscription(status: SubscriptionStatus, trial_ends_at: Option<DateTime<Utc>>) -> Subscription {
        Subscription {
            user_id: Uuid::new_v4(),
            status,
            plan: PlanTier::Professional,
            trial_ends_at,
        }
    }

    #[test]
    fn active_and_past_due_keep_the_plan() {
        let now = Utc::now();
        let sub = subscription(SubscriptionStatus::Active, None);
        assert_eq!(effective_plan(Some(&sub), now), PlanTier::Professional);
        let sub = subscription(SubscriptionStatus::PastDue, None);
        assert_eq!(effective_plan(Some(&sub), now), PlanTier::Professional);
    }

    #[test]
    fn trials_are_time_boxed() {
        let now = Utc::now();
        let running = subscription(SubscriptionStatus::Trial, Some(now + Duration::days(3)));
        assert_eq!(effective_plan(Some(&running), now), PlanTier::Professional);

        let lapsed = subscription(SubscriptionStatus::Trial, Some(now - Duration::seconds(1)));
        assert_eq!(effective_plan(Some(&lapsed), now), PlanTier::Expired);

        let dateless = subscription(SubscriptionStatus::Trial, None);
        assert_eq!(effective_plan(Some(&dateless), now), PlanTier::Expired);
    }

    #[test]
    fn canceled_or_missing_resolves_to_expired() {
        let now = Utc::now();
        let sub = subscription(SubscriptionStatus::Canceled, None);
        assert_eq!(effective_plan(Some(&sub), now), PlanTier::Expired);
        assert_eq!(effective_plan(None, now), PlanTier::Expired);
    }

    #[test]
    fn the_expired_plan_blocks_everything() {
        let limits = PlanTier::Expired.limits();
        assert!(!limits.invoices_per_month.allows(0));
        assert!(!limits.companies.allows(0));
        assert!(!limits.multi_currency);
    }
}
