//! Content reports raised by users against posts or comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{REPORT_TYPE_COMMENT, REPORT_TYPE_POST};
use crate::error::DomainError;

/// Kind of content a report targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    Post,
    Comment,
}

impl ReportType {
    /// Stored textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Post => REPORT_TYPE_POST,
            ReportType::Comment => REPORT_TYPE_COMMENT,
        }
    }
}

impl FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            REPORT_TYPE_POST => Ok(ReportType::Post),
            REPORT_TYPE_COMMENT => Ok(ReportType::Comment),
            other => Err(DomainError::validation(format!(
                "Unknown report type: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report against a piece of user content.
///
/// Reports are resolved, never soft deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub report_type: ReportType,
    /// Id of the reported post or comment
    pub reported_content_id: String,
    pub reason: String,
    /// Id of the user who owns the reported content
    pub content_owner_id: String,
    /// Id of the reporting user
    pub reported_by_id: String,
    #[serde(default)]
    pub resolved: bool,
    pub reported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_text_forms() {
        assert_eq!(ReportType::Post.as_str(), "POST");
        assert_eq!(ReportType::Comment.to_string(), "COMMENT");
        assert_eq!("POST".parse::<ReportType>().unwrap(), ReportType::Post);
        assert_eq!("COMMENT".parse::<ReportType>().unwrap(), ReportType::Comment);
    }

    #[test]
    fn test_unknown_report_type_is_rejected() {
        let err = "post".parse::<ReportType>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_report_type_serde_matches_stored_form() {
        let json = serde_json::to_string(&ReportType::Comment).unwrap();
        assert_eq!(json, "\"COMMENT\"");
    }
}
