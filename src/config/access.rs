//! Access configuration

use serde::Deserialize;

use crate::domain::access::{AccessPolicy, AdminSet};

/// Access rules: subscription bypass and administrator list
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccessConfig {
    /// Grant every non-blank email (maintenance/testing switch)
    #[serde(default)]
    pub bypass_subscription: bool,

    /// Administrator emails (comma-separated), e.g. `owner@example.com`
    #[serde(default)]
    pub admin_emails: String,
}

impl AccessConfig {
    pub fn admin_set(&self) -> AdminSet {
        AdminSet::parse_list(&self.admin_emails)
    }

    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.bypass_subscription, self.admin_set())
    }
}
