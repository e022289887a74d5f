//! Outcome of an access evaluation.

use serde::{Deserialize, Serialize};

/// Result of evaluating whether an email may reach the VIP area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(GrantReason),
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns true if access is granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted(_))
    }

    /// Converts the decision to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<GrantReason, DenialReason> {
        match self {
            AccessDecision::Granted(reason) => Ok(reason),
            AccessDecision::Denied(reason) => Err(reason),
        }
    }
}

/// Why access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantReason {
    /// Subscription enforcement is switched off process-wide.
    Bypass,
    /// The email belongs to the administrator set.
    Admin,
    /// The subscription's end date has not passed.
    ActiveSubscription,
}

/// Why access was denied.
///
/// Only used for logging: every variant surfaces to users as the same
/// "not authorized" answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No email was supplied, or it was blank.
    MissingEmail,
    /// No subscription record exists for the email.
    NoSubscription,
    /// The record's end date could not be parsed.
    MalformedPeriodEnd,
    /// The record's end date is in the past.
    Expired,
}

impl DenialReason {
    /// Get a user-facing message for the denial.
    pub fn user_message(&self) -> &'static str {
        "Subscription expired or invalid."
    }
}
