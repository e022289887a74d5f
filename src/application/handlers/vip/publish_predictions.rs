//! PublishPredictionsHandler - Command handler replacing the VIP content.

use std::sync::Arc;

use crate::application::repositories::PredictionRepository;
use crate::application::validity_oracle::ValidityOracle;
use crate::domain::access::AccessError;
use crate::domain::foundation::{Email, ValidationError};
use crate::domain::prediction::{Prediction, PredictionList};

#[derive(Debug, Clone)]
pub struct PublishPredictionsCommand {
    pub actor: Email,
    pub pronos: Vec<Prediction>,
}

pub struct PublishPredictionsHandler {
    predictions: Arc<PredictionRepository>,
    oracle: Arc<ValidityOracle>,
}

impl PublishPredictionsHandler {
    pub fn new(predictions: Arc<PredictionRepository>, oracle: Arc<ValidityOracle>) -> Self {
        Self {
            predictions,
            oracle,
        }
    }

    /// Replaces the whole list. Entries with a blank fixture are rejected.
    pub async fn handle(&self, cmd: PublishPredictionsCommand) -> Result<PredictionList, AccessError> {
        if !self.oracle.is_admin(cmd.actor.as_str()) {
            return Err(AccessError::Forbidden);
        }

        if cmd.pronos.iter().any(|p| p.fixture.trim().is_empty()) {
            return Err(ValidationError::empty_field("match").into());
        }

        let list = PredictionList::new(cmd.pronos);
        self.predictions.replace(list.clone()).await?;

        tracing::info!(actor = %cmd.actor, count = list.len(), "Predictions published");
        Ok(list)
    }
}
