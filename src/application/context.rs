//! Application context: every service the HTTP layer needs, built once.
//!
//! Also the collaborator interface used by route handlers: `is_valid`,
//! `is_admin`, `load_subscriptions`, `save_subscription`, `load_credentials`,
//! `save_credential`.

use secrecy::ExposeSecret;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

use super::bootstrap::BootstrapResolver;
use super::handlers::{
    AddSubscriptionHandler, GetVipContentHandler, ListSubscriptionsHandler, LoginHandler,
    PublishPredictionsHandler, RegisterUserHandler,
};
use super::repositories::{
    CredentialMap, CredentialRepository, PredictionRepository, RepositoryError,
    SubscriptionRepository,
};
use super::session_gate::SessionGate;
use super::validity_oracle::ValidityOracle;
use crate::adapters::auth::JwtSessionTokens;
use crate::config::AppConfig;
use crate::domain::access::AccessPolicy;
use crate::domain::credential::{PasswordHasher, UserCredential};
use crate::domain::subscription::{SubscriptionRecord, SubscriptionStore};
use crate::ports::{RecordStore, RecordStoreError, SessionTokens};

/// Shared services, cloned into each request.
#[derive(Clone)]
pub struct AppContext {
    pub subscriptions: Arc<SubscriptionRepository>,
    pub credentials: Arc<CredentialRepository>,
    pub predictions: Arc<PredictionRepository>,
    pub oracle: Arc<ValidityOracle>,
    pub gate: Arc<SessionGate>,
    pub hasher: Arc<PasswordHasher>,
    pub tokens: Arc<dyn SessionTokens>,
}

impl AppContext {
    pub fn new(
        subscriptions: Arc<SubscriptionRepository>,
        credentials: Arc<CredentialRepository>,
        predictions: Arc<PredictionRepository>,
        policy: AccessPolicy,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<dyn SessionTokens>,
    ) -> Self {
        let oracle = Arc::new(ValidityOracle::new(policy, subscriptions.clone()));
        let gate = Arc::new(SessionGate::new(oracle.clone()));
        Self {
            subscriptions,
            credentials,
            predictions,
            oracle,
            gate,
            hasher,
            tokens,
        }
    }

    /// Seeds the durable datasets, loads every repository and wires services.
    ///
    /// Bootstrap write failures are logged and startup continues with
    /// whatever the repositories can read.
    pub async fn initialize(config: &AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let storage = &config.storage;
        let subscriptions_path = storage.subscriptions_path();
        let users_path = storage.users_path();
        let predictions_path = storage.predictions_path();

        let resolver = BootstrapResolver::new(store.clone());
        let datasets = [
            (&subscriptions_path, &storage.legacy_subscriptions_json, json!([])),
            (&users_path, &storage.legacy_users_json, json!([])),
            (&predictions_path, &storage.legacy_predictions_json, json!({"pronos": []})),
        ];
        for (durable, legacy, default) in &datasets {
            seed(&resolver, durable, legacy, default).await;
        }

        let subscriptions = Arc::new(SubscriptionRepository::with_legacy_fallbacks(
            store.clone(),
            subscriptions_path.clone(),
            Some(storage.legacy_subscriptions_json.clone()),
            Some(storage.legacy_subscriptions_csv.clone()),
        ));
        let credentials = Arc::new(CredentialRepository::new(store.clone(), users_path.clone()));
        let predictions = Arc::new(PredictionRepository::new(store, predictions_path.clone()));

        subscriptions.load().await;
        credentials.load().await;
        predictions.load().await;

        let policy = config.access.policy();
        if policy.bypass() {
            tracing::warn!("Subscription bypass enabled: every non-blank email is granted");
        }
        tracing::info!(admins = policy.admins().len(), "Access policy configured");

        let tokens = JwtSessionTokens::new(
            config.auth.session_secret.expose_secret().as_bytes(),
            config.auth.session_ttl(),
        );
        let hasher = PasswordHasher::new(config.auth.password_pepper.expose_secret());

        Self::new(
            subscriptions,
            credentials,
            predictions,
            policy,
            Arc::new(hasher),
            Arc::new(tokens),
        )
    }

    // Handlers are created on demand from the shared services.

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.credentials.clone(), self.hasher.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.credentials.clone(), self.hasher.clone(), self.gate.clone())
    }

    pub fn get_vip_content_handler(&self) -> GetVipContentHandler {
        GetVipContentHandler::new(self.gate.clone(), self.predictions.clone())
    }

    pub fn add_subscription_handler(&self) -> AddSubscriptionHandler {
        AddSubscriptionHandler::new(self.subscriptions.clone(), self.oracle.clone())
    }

    pub fn list_subscriptions_handler(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.subscriptions.clone(), self.oracle.clone())
    }

    pub fn publish_predictions_handler(&self) -> PublishPredictionsHandler {
        PublishPredictionsHandler::new(self.predictions.clone(), self.oracle.clone())
    }

    pub async fn is_valid(&self, email: &str) -> bool {
        self.oracle.is_valid(email).await
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.oracle.is_admin(email)
    }

    /// Re-reads the subscription sources and refreshes the cache.
    pub async fn load_subscriptions(&self) -> Arc<SubscriptionStore> {
        self.subscriptions.load().await
    }

    pub async fn save_subscription(&self, record: SubscriptionRecord) -> Result<(), RecordStoreError> {
        self.subscriptions.save_subscription(record).await.map(|_| ())
    }

    /// Re-reads the users file and refreshes the cache.
    pub async fn load_credentials(&self) -> Arc<CredentialMap> {
        self.credentials.load().await
    }

    pub async fn save_credential(&self, credential: UserCredential) -> Result<(), RepositoryError> {
        self.credentials.save_credential(credential).await
    }
}

async fn seed(resolver: &BootstrapResolver, durable: &Path, legacy: &Path, default: &Value) {
    match resolver.ensure(durable, Some(legacy), default).await {
        Ok(outcome) => {
            tracing::info!(path = %durable.display(), ?outcome, "Dataset ready");
        }
        Err(e) => {
            tracing::error!(path = %durable.display(), error = %e, "Failed to seed dataset");
        }
    }
}
