//! Legacy CSV subscription source.
//!
//! Comma-delimited, header row naming at least `email`, `date_debut` and
//! `date_fin` (any order, extra columns ignored). Fields are trimmed. A field
//! wrapped in double quotes may contain commas, and `""` inside it is a literal
//! quote. Quoted line breaks are not supported. Blank lines are skipped.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::subscription::{SubscriptionRecord, SubscriptionRow};
use crate::ports::{SourceOutcome, SubscriptionSource};

const REQUIRED_COLUMNS: [&str; 3] = ["email", "date_debut", "date_fin"];

/// Errors raised while parsing subscription CSV content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("CSV has no header row")]
    MissingHeader,

    #[error("CSV header is missing column '{0}'")]
    MissingColumn(&'static str),
}

/// Subscription source backed by a legacy CSV file
#[derive(Debug, Clone)]
pub struct CsvSubscriptionSource {
    path: PathBuf,
}

impl CsvSubscriptionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SubscriptionSource for CsvSubscriptionSource {
    fn name(&self) -> &str {
        "legacy-csv"
    }

    async fn load(&self) -> SourceOutcome {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return SourceOutcome::Empty,
            Err(e) => {
                return SourceOutcome::Failed(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                ))
            }
        };

        match parse_subscriptions_csv(&content) {
            Ok(records) => SourceOutcome::from_records(records),
            Err(e) => SourceOutcome::Failed(format!("{}: {}", self.path.display(), e)),
        }
    }
}

/// Parses CSV content into records, dropping rows whose email is blank.
pub fn parse_subscriptions_csv(content: &str) -> Result<Vec<SubscriptionRecord>, CsvError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header: Vec<String> = split_fields(lines.next().ok_or(CsvError::MissingHeader)?)
        .into_iter()
        .map(|field| field.to_lowercase())
        .collect();

    let mut indices = [0usize; 3];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header
            .iter()
            .position(|name| name == column)
            .ok_or(CsvError::MissingColumn(column))?;
    }
    let [email_idx, start_idx, end_idx] = indices;

    let records = lines
        .filter_map(|line| {
            let fields = split_fields(line);
            let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
            SubscriptionRow {
                email: field(email_idx),
                date_debut: field(start_idx),
                date_fin: field(end_idx),
            }
            .into_record()
        })
        .collect();

    Ok(records)
}

/// Splits one line into trimmed fields, honouring double-quoted fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_standard_header() {
        let records =
            parse_subscriptions_csv("email,date_debut,date_fin\nbob@x.com,2024-01-01,2030-01-01\n")
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email.as_str(), "bob@x.com");
        assert_eq!(records[0].period_start, "2024-01-01");
        assert_eq!(records[0].period_end, "2030-01-01");
    }

    #[test]
    fn locates_columns_by_name() {
        let records = parse_subscriptions_csv(
            "date_fin,Name,EMAIL,date_debut\r\n2030-01-01,Bob,\"Bob@X.com\",2024-01-01\r\n",
        )
        .unwrap();
        assert_eq!(records[0].email.as_str(), "bob@x.com");
        assert_eq!(records[0].period_end, "2030-01-01");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let records = parse_subscriptions_csv(
            "name,email,date_debut,date_fin\n\"Doe, J\",j@doe.com,2024-01-01,2030-01-01\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email.as_str(), "j@doe.com");
        assert_eq!(records[0].period_start, "2024-01-01");
        assert_eq!(records[0].period_end, "2030-01-01");
    }

    #[test]
    fn split_handles_escaped_quotes_and_padding() {
        assert_eq!(
            split_fields(r#" "Say ""hi"", Bob" , " a@b.com ",,x"#),
            vec!["Say \"hi\", Bob", "a@b.com", "", "x"]
        );
    }

    #[test]
    fn skips_blank_lines_and_blank_emails() {
        let records = parse_subscriptions_csv(
            "\nemail,date_debut,date_fin\n\n ,2024-01-01,2030-01-01\na@b.com,2024-01-01,2024-02-01\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email.as_str(), "a@b.com");
    }

    #[test]
    fn short_rows_get_empty_dates() {
        let records = parse_subscriptions_csv("email,date_debut,date_fin\nc@d.com\n").unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].period_end.is_empty());
    }

    #[test]
    fn missing_column_is_error() {
        assert_eq!(
            parse_subscriptions_csv("email,date_debut\na@b.com,2024-01-01\n").unwrap_err(),
            CsvError::MissingColumn("date_fin")
        );
    }

    #[test]
    fn empty_content_is_missing_header() {
        assert_eq!(parse_subscriptions_csv("  \n").unwrap_err(), CsvError::MissingHeader);
    }

    #[test]
    fn strips_byte_order_mark() {
        let records =
            parse_subscriptions_csv("\u{feff}email,date_debut,date_fin\na@b.com,2024-01-01,2024-02-01")
                .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = CsvSubscriptionSource::new(temp_dir.path().join("abonnements.csv"));
        assert_eq!(source.load().await, SourceOutcome::Empty);
    }

    #[tokio::test]
    async fn header_only_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("abonnements.csv");
        std::fs::write(&path, "email,date_debut,date_fin\n").unwrap();
        assert_eq!(CsvSubscriptionSource::new(path).load().await, SourceOutcome::Empty);
    }

    #[tokio::test]
    async fn bad_header_file_is_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("abonnements.csv");
        std::fs::write(&path, "mail;debut;fin\n").unwrap();
        assert!(matches!(
            CsvSubscriptionSource::new(path).load().await,
            SourceOutcome::Failed(_)
        ));
    }
}
