//! Configured administrator identities.

use std::collections::HashSet;

use crate::domain::foundation::Email;

/// Emails granted unconditional access, fixed for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSet {
    emails: HashSet<Email>,
}

impl AdminSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from raw addresses, skipping blank entries.
    pub fn from_emails<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .filter_map(|raw| Email::parse(raw.as_ref()).ok())
            .collect();
        Self { emails }
    }

    /// Parses a comma-separated list such as `"a@x.com, b@y.com"`.
    pub fn parse_list(list: &str) -> Self {
        Self::from_emails(list.split(','))
    }

    pub fn contains(&self, email: &Email) -> bool {
        self.emails.contains(email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_normalizes_and_skips_blanks() {
        let admins = AdminSet::parse_list(" Boss@Site.com, ,ops@site.com,");
        assert_eq!(admins.len(), 2);
        assert!(admins.contains(&Email::parse("boss@site.com").unwrap()));
        assert!(admins.contains(&Email::parse("OPS@SITE.COM").unwrap()));
    }

    #[test]
    fn empty_list_yields_empty_set() {
        assert!(AdminSet::parse_list("").is_empty());
    }
}
