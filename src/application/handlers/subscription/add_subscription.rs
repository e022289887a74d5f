//! AddSubscriptionHandler - Command handler for admin-created subscriptions.

use std::sync::Arc;

use crate::application::repositories::SubscriptionRepository;
use crate::application::validity_oracle::ValidityOracle;
use crate::domain::access::AccessError;
use crate::domain::foundation::Email;
use crate::domain::subscription::SubscriptionRecord;

/// Command to add or extend a subscription.
#[derive(Debug, Clone)]
pub struct AddSubscriptionCommand {
    /// The administrator issuing the command.
    pub actor: Email,
    pub email: String,
    pub date_debut: String,
    pub date_fin: String,
}

/// Result of a successful upsert.
#[derive(Debug, Clone)]
pub struct AddSubscriptionResult {
    pub record: SubscriptionRecord,
    /// True if a record for this email already existed and was replaced.
    pub replaced: bool,
}

/// Handler for adding subscriptions. Upserts: the latest write for an email wins.
pub struct AddSubscriptionHandler {
    subscriptions: Arc<SubscriptionRepository>,
    oracle: Arc<ValidityOracle>,
}

impl AddSubscriptionHandler {
    pub fn new(subscriptions: Arc<SubscriptionRepository>, oracle: Arc<ValidityOracle>) -> Self {
        Self {
            subscriptions,
            oracle,
        }
    }

    pub async fn handle(
        &self,
        cmd: AddSubscriptionCommand,
    ) -> Result<AddSubscriptionResult, AccessError> {
        // 1. Only administrators may write subscriptions
        if !self.oracle.is_admin(cmd.actor.as_str()) {
            tracing::warn!(actor = %cmd.actor, "Non-admin attempted to add a subscription");
            return Err(AccessError::Forbidden);
        }

        // 2. Validate input
        let record = SubscriptionRecord::from_input(&cmd.email, &cmd.date_debut, &cmd.date_fin)?;

        // 3. Upsert through the repository
        let replaced = self.subscriptions.find(&record.email).await.is_some();
        self.subscriptions.save_subscription(record.clone()).await?;

        tracing::info!(
            actor = %cmd.actor,
            email = %record.email,
            date_fin = %record.period_end,
            replaced,
            "Subscription saved"
        );
        Ok(AddSubscriptionResult { record, replaced })
    }
}
