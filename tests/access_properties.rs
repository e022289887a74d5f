//! Property tests for email normalization and the access policy.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use vip_gate::domain::access::{AccessDecision, AccessPolicy, AdminSet, DenialReason, GrantReason};
use vip_gate::domain::foundation::Email;
use vip_gate::domain::subscription::{SubscriptionRecord, SubscriptionStore};

fn local_part() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._]{1,16}"
}

fn email_string() -> impl Strategy<Value = String> {
    (local_part(), "[a-zA-Z]{1,10}", "[a-zA-Z]{2,4}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..40_000).prop_map(|days| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days))
}

fn store_with(email: &str, end: NaiveDate) -> SubscriptionStore {
    SubscriptionStore::from_records(vec![SubscriptionRecord::new(
        Email::parse(email).unwrap(),
        "1970-01-01",
        end.format("%Y-%m-%d").to_string(),
    )])
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in email_string(), left in padding(), right in padding()) {
        let once = Email::normalize(&format!("{}{}{}", left, raw, right));
        prop_assert_eq!(Email::normalize(&once), once.clone());
        prop_assert_eq!(once, raw.to_lowercase());
    }

    #[test]
    fn bypass_grants_every_non_blank_email(raw in email_string(), today in any_date()) {
        let policy = AccessPolicy::new(true, AdminSet::new());
        prop_assert_eq!(
            policy.evaluate(&raw, &SubscriptionStore::new(), today),
            AccessDecision::Granted(GrantReason::Bypass)
        );
    }

    #[test]
    fn admin_is_granted_regardless_of_case_or_records(
        raw in email_string(),
        today in any_date(),
        expired_days in 1i64..1000,
    ) {
        let policy = AccessPolicy::new(false, AdminSet::from_emails([raw.to_lowercase()]));
        let store = store_with(&raw, today - Duration::days(expired_days));

        prop_assert_eq!(
            policy.evaluate(&raw.to_uppercase(), &store, today),
            AccessDecision::Granted(GrantReason::Admin)
        );
        let padded = format!("  {}  ", raw);
        prop_assert!(policy.is_admin(&padded));
    }

    #[test]
    fn end_date_is_inclusive(raw in email_string(), end in any_date(), offset in -500i64..500) {
        let policy = AccessPolicy::default();
        let store = store_with(&raw, end);
        let today = end + Duration::days(offset);

        let decision = policy.evaluate(&raw, &store, today);
        if offset <= 0 {
            prop_assert_eq!(decision, AccessDecision::Granted(GrantReason::ActiveSubscription));
        } else {
            prop_assert_eq!(decision, AccessDecision::Denied(DenialReason::Expired));
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding(raw in email_string(), end in any_date(), left in padding()) {
        let policy = AccessPolicy::default();
        let store = store_with(&raw.to_lowercase(), end);
        let query = format!("{}{}", left, raw.to_uppercase());

        prop_assert!(policy.evaluate(&query, &store, end).is_granted());
    }

    #[test]
    fn malformed_end_date_is_denied(raw in email_string(), junk in "[a-z/]{1,10}", today in any_date()) {
        let policy = AccessPolicy::default();
        let store = SubscriptionStore::from_records(vec![SubscriptionRecord::new(
            Email::parse(&raw).unwrap(),
            "1970-01-01",
            junk,
        )]);

        prop_assert_eq!(
            policy.evaluate(&raw, &store, today),
            AccessDecision::Denied(DenialReason::MalformedPeriodEnd)
        );
    }
}

#[test]
fn blank_email_is_denied_even_with_bypass() {
    let policy = AccessPolicy::new(true, AdminSet::parse_list("a@x.com"));
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(
        policy.evaluate("   ", &SubscriptionStore::new(), today),
        AccessDecision::Denied(DenialReason::MissingEmail)
    );
}
