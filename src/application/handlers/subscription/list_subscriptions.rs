//! ListSubscriptionsHandler - Query handler for the admin subscription overview.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::repositories::SubscriptionRepository;
use crate::application::validity_oracle::ValidityOracle;
use crate::domain::access::AccessError;
use crate::domain::foundation::Email;
use crate::domain::subscription::SubscriptionRecord;

#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub actor: Email,
}

/// One record with its status on the evaluation date.
#[derive(Debug, Clone)]
pub struct SubscriptionStatus {
    pub record: SubscriptionRecord,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ListSubscriptionsResult {
    pub today: NaiveDate,
    pub subscriptions: Vec<SubscriptionStatus>,
}

pub struct ListSubscriptionsHandler {
    subscriptions: Arc<SubscriptionRepository>,
    oracle: Arc<ValidityOracle>,
}

impl ListSubscriptionsHandler {
    pub fn new(subscriptions: Arc<SubscriptionRepository>, oracle: Arc<ValidityOracle>) -> Self {
        Self {
            subscriptions,
            oracle,
        }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<ListSubscriptionsResult, AccessError> {
        if !self.oracle.is_admin(query.actor.as_str()) {
            return Err(AccessError::Forbidden);
        }

        let today = ValidityOracle::today();
        let subscriptions = self
            .subscriptions
            .snapshot()
            .await
            .iter()
            .map(|record| SubscriptionStatus {
                active: record.is_active_on(today),
                record: record.clone(),
            })
            .collect();

        Ok(ListSubscriptionsResult {
            today,
            subscriptions,
        })
    }
}
