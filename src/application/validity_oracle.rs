//! Validity oracle: the single "may this email see VIP content" decision.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::repositories::SubscriptionRepository;
use crate::domain::access::{AccessDecision, AccessPolicy};

/// Evaluates the access policy against the current subscription snapshot.
///
/// Has no side effects beyond a debug log of the decision.
pub struct ValidityOracle {
    policy: AccessPolicy,
    subscriptions: Arc<SubscriptionRepository>,
}

impl ValidityOracle {
    pub fn new(policy: AccessPolicy, subscriptions: Arc<SubscriptionRepository>) -> Self {
        Self {
            policy,
            subscriptions,
        }
    }

    /// Process-local calendar date.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub async fn decide(&self, email: &str, today: NaiveDate) -> AccessDecision {
        let snapshot = self.subscriptions.snapshot().await;
        let decision = self.policy.evaluate(email, &snapshot, today);
        tracing::debug!(email = %email.trim(), ?decision, %today, "Evaluated access");
        decision
    }

    pub async fn is_valid(&self, email: &str) -> bool {
        self.is_valid_on(email, Self::today()).await
    }

    pub async fn is_valid_on(&self, email: &str, today: NaiveDate) -> bool {
        self.decide(email, today).await.is_granted()
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.policy.is_admin(email)
    }
}
