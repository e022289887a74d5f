//! Request and response bodies for the VIP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::{ListSubscriptionsResult, SubscriptionStatus};
use crate::domain::prediction::{Prediction, PredictionList};
use crate::domain::subscription::SubscriptionRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/admin/subscriptions`, using the dataset's field names.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSubscriptionRequest {
    pub email: String,
    pub date_debut: String,
    pub date_fin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishPredictionsRequest {
    #[serde(default)]
    pub pronos: Vec<Prediction>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VipContentResponse {
    pub email: String,
    pub pronos: Vec<Prediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionListResponse {
    pub pronos: Vec<Prediction>,
}

impl From<PredictionList> for PredictionListResponse {
    fn from(list: PredictionList) -> Self {
        Self { pronos: list.pronos }
    }
}

/// One subscription as shown to administrators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionResponse {
    pub email: String,
    pub date_debut: String,
    pub date_fin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl From<&SubscriptionRecord> for SubscriptionResponse {
    fn from(record: &SubscriptionRecord) -> Self {
        Self {
            email: record.email.to_string(),
            date_debut: record.period_start.clone(),
            date_fin: record.period_end.clone(),
            active: None,
        }
    }
}

impl From<&SubscriptionStatus> for SubscriptionResponse {
    fn from(status: &SubscriptionStatus) -> Self {
        Self {
            active: Some(status.active),
            ..Self::from(&status.record)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSubscriptionResponse {
    pub subscription: SubscriptionResponse,
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    pub today: String,
    pub subscriptions: Vec<SubscriptionResponse>,
}

impl From<ListSubscriptionsResult> for SubscriptionListResponse {
    fn from(result: ListSubscriptionsResult) -> Self {
        Self {
            today: result.today.format("%Y-%m-%d").to_string(),
            subscriptions: result.subscriptions.iter().map(SubscriptionResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Email;
    use chrono::NaiveDate;

    fn record() -> SubscriptionRecord {
        SubscriptionRecord::new(Email::parse("a@x.com").unwrap(), "2024-01-01", "2024-12-31")
    }

    #[test]
    fn subscription_response_uses_dataset_field_names() {
        let json = serde_json::to_value(SubscriptionResponse::from(&record())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@x.com", "date_debut": "2024-01-01", "date_fin": "2024-12-31"})
        );
    }

    #[test]
    fn list_response_includes_status() {
        let result = ListSubscriptionsResult {
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            subscriptions: vec![SubscriptionStatus {
                record: record(),
                active: true,
            }],
        };

        let response = SubscriptionListResponse::from(result);

        assert_eq!(response.today, "2024-06-01");
        assert_eq!(response.subscriptions[0].active, Some(true));
    }

    #[test]
    fn publish_request_accepts_match_field() {
        let request: PublishPredictionsRequest =
            serde_json::from_str(r#"{"pronos": [{"match": "PSG - OM", "prono": "1"}]}"#).unwrap();
        assert_eq!(request.pronos[0].fixture, "PSG - OM");
    }
}
