//! GetVipContentHandler - Query handler for the protected prediction list.

use std::sync::Arc;

use crate::application::repositories::PredictionRepository;
use crate::application::session_gate::SessionGate;
use crate::domain::access::AccessError;
use crate::domain::foundation::Email;
use crate::domain::prediction::PredictionList;

#[derive(Debug, Clone)]
pub struct GetVipContentQuery {
    pub email: Email,
}

/// Handler for reading VIP content.
///
/// Runs the session gate on every call; there is no per-session grant.
pub struct GetVipContentHandler {
    gate: Arc<SessionGate>,
    predictions: Arc<PredictionRepository>,
}

impl GetVipContentHandler {
    pub fn new(gate: Arc<SessionGate>, predictions: Arc<PredictionRepository>) -> Self {
        Self { gate, predictions }
    }

    pub async fn handle(&self, query: GetVipContentQuery) -> Result<Arc<PredictionList>, AccessError> {
        self.gate.authorize(query.email.as_str()).await?;
        Ok(self.predictions.current().await)
    }
}
