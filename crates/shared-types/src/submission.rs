use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{FilterOption, Record, RecordId};
use crate::error::PortalError;
use crate::priority::Priority;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Review status of a document submission.
///
/// - `Pending`: initial state, waiting in the approval queue.
/// - `Approved` / `Rejected`: terminal review outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending Review",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::Rejected => "Rejected",
        }
    }

    /// Approved and rejected submissions have left the queue for good.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Pending)
    }

    pub fn filter_options() -> Vec<FilterOption> {
        let mut options = vec![FilterOption::new("all", "All Status")];
        options.extend(Self::ALL.iter().map(|s| FilterOption::new(s.as_str(), s.label())));
        options
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PortalError::bad_request(format!("Unknown submission status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Document categories an officer can submit under.
pub const SUBMISSION_CATEGORIES: &[&str] = &[
    "Financial Report",
    "Purchase Receipt",
    "Event Expense",
    "Training Expense",
    "Office Supplies",
    "Expense Report",
    "Performance Report",
];

/// A reviewer comment left on a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: RecordId,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A document submitted by an officer for admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Name of the submitting officer.
    pub officer: String,
    pub organization: String,
    /// One of [`SUBMISSION_CATEGORIES`] in practice; not enforced.
    pub category: String,
    pub submitted_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_review_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub comments: Vec<ReviewComment>,
}

impl Record for Submission {
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["status", "priority", "category"];
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "officer", "organization", "category"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.officer.as_str(),
            self.organization.as_str(),
            self.category.as_str(),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.submitted_date
    }

    fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_date
    }
}
