//! Subscription record and its persisted row form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{string_or_empty, Email, ValidationError};

/// Calendar date format used by every subscription dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A subscription period attached to one email.
///
/// Dates are kept exactly as stored. `period_end` is only parsed when access is
/// evaluated, so a malformed value makes the record invalid instead of making
/// the whole dataset unreadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub email: Email,
    pub period_start: String,
    pub period_end: String,
}

impl SubscriptionRecord {
    pub fn new(email: Email, period_start: impl Into<String>, period_end: impl Into<String>) -> Self {
        Self {
            email,
            period_start: period_start.into(),
            period_end: period_end.into(),
        }
    }

    /// Builds a record from form input, requiring both dates to parse and the
    /// period to be non-negative.
    pub fn from_input(
        email: &str,
        period_start: &str,
        period_end: &str,
    ) -> Result<Self, ValidationError> {
        let email = Email::parse(email)?;
        let start = parse_date("date_debut", period_start)?;
        let end = parse_date("date_fin", period_end)?;
        if end < start {
            return Err(ValidationError::invalid_format(
                "date_fin",
                "must not be before date_debut",
            ));
        }
        Ok(Self::new(
            email,
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        ))
    }

    /// Parses `period_end`, returning `None` when it is malformed.
    pub fn period_end_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.period_end.trim(), DATE_FORMAT).ok()
    }

    /// Returns true if `period_end` parses and `today` is on or before it.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.period_end_date().map_or(false, |end| today <= end)
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

/// On-disk shape of a subscription: `{"email", "date_debut", "date_fin"}`.
///
/// Missing or non-string fields decode as empty, so one damaged row only
/// invalidates itself and never the surrounding file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionRow {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date_debut: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date_fin: String,
}

impl SubscriptionRow {
    /// Converts the row into a record, or `None` if the email is blank.
    pub fn into_record(self) -> Option<SubscriptionRecord> {
        let email = Email::parse(&self.email).ok()?;
        Some(SubscriptionRecord::new(email, self.date_debut, self.date_fin))
    }
}

impl From<&SubscriptionRecord> for SubscriptionRow {
    fn from(record: &SubscriptionRecord) -> Self {
        Self {
            email: record.email.to_string(),
            date_debut: record.period_start.clone(),
            date_fin: record.period_end.clone(),
        }
    }
}
