use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::common::{FilterOption, Record, RecordId};
use crate::error::PortalError;

/// Kind of entry in an officer's activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Submission,
    Approval,
    Rejection,
    Comment,
    Download,
    Edit,
    System,
}

impl ActivityType {
    pub const ALL: [ActivityType; 7] = [
        ActivityType::Submission,
        ActivityType::Approval,
        ActivityType::Rejection,
        ActivityType::Comment,
        ActivityType::Download,
        ActivityType::Edit,
        ActivityType::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Submission => "submission",
            ActivityType::Approval => "approval",
            ActivityType::Rejection => "rejection",
            ActivityType::Comment => "comment",
            ActivityType::Download => "download",
            ActivityType::Edit => "edit",
            ActivityType::System => "system",
        }
    }

    /// Plural label used by the activity type select box.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Submission => "Submissions",
            ActivityType::Approval => "Approvals",
            ActivityType::Rejection => "Rejections",
            ActivityType::Comment => "Comments",
            ActivityType::Download => "Downloads",
            ActivityType::Edit => "Edits",
            ActivityType::System => "System",
        }
    }

    pub fn filter_options() -> Vec<FilterOption> {
        let mut options = vec![FilterOption::new("all", "All Activities")];
        options.extend(Self::ALL.iter().map(|t| FilterOption::new(t.as_str(), t.label())));
        options
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PortalError::bad_request(format!("Unknown activity type '{s}'")))
    }
}

/// One timeline entry of the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    /// Actor shown on the entry ("You", "Finance Team", ...).
    pub user: String,
    pub timestamp: DateTime<Utc>,
    /// Free-form key/value details rendered under the entry.
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Record for Activity {
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["type"];
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description", "user"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(self.activity_type.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.user.as_str(),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
