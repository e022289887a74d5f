//! Access policy: bypass flag, admin set, then subscription end date.

use chrono::NaiveDate;

use super::{AccessDecision, AdminSet, DenialReason, GrantReason};
use crate::domain::foundation::Email;
use crate::domain::subscription::SubscriptionStore;

/// Static access rules, resolved once from configuration.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    bypass: bool,
    admins: AdminSet,
}

impl AccessPolicy {
    pub fn new(bypass: bool, admins: AdminSet) -> Self {
        Self { bypass, admins }
    }

    pub fn bypass(&self) -> bool {
        self.bypass
    }

    pub fn admins(&self) -> &AdminSet {
        &self.admins
    }

    /// Returns true if `raw_email`, once normalized, is an administrator.
    pub fn is_admin(&self, raw_email: &str) -> bool {
        Email::parse(raw_email)
            .map(|email| self.admins.contains(&email))
            .unwrap_or(false)
    }

    /// Evaluates access for `raw_email` against `store` on the calendar date
    /// `today`.
    ///
    /// Order: blank email, bypass, admin set, record lookup, end date. The end
    /// date is inclusive.
    pub fn evaluate(
        &self,
        raw_email: &str,
        store: &SubscriptionStore,
        today: NaiveDate,
    ) -> AccessDecision {
        let email = match Email::parse(raw_email) {
            Ok(email) => email,
            Err(_) => return AccessDecision::Denied(DenialReason::MissingEmail),
        };

        if self.bypass {
            return AccessDecision::Granted(GrantReason::Bypass);
        }

        if self.admins.contains(&email) {
            return AccessDecision::Granted(GrantReason::Admin);
        }

        let record = match store.get(&email) {
            Some(record) => record,
            None => return AccessDecision::Denied(DenialReason::NoSubscription),
        };

        match record.period_end_date() {
            None => AccessDecision::Denied(DenialReason::MalformedPeriodEnd),
            Some(end) if today <= end => AccessDecision::Granted(GrantReason::ActiveSubscription),
            Some(_) => AccessDecision::Denied(DenialReason::Expired),
        }
    }
}
