use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{FilterOption, Record, RecordId};
use crate::priority::Priority;

/// Announcement categories offered by the officer announcement board.
pub const ANNOUNCEMENT_CATEGORIES: &[&str] = &[
    "Policy Update",
    "System Notice",
    "Finance",
    "Training",
    "Contact Update",
    "Reminder",
    "Security",
    "Holiday Notice",
];

/// Category select box options; categories are their own labels.
pub fn announcement_category_options() -> Vec<FilterOption> {
    let mut options = vec![FilterOption::new("all", "All Categories")];
    options.extend(ANNOUNCEMENT_CATEGORIES.iter().map(|&c| FilterOption::new(c, c)));
    options
}

/// A published announcement with its read reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: Priority,
    pub author: String,
    pub published_date: DateTime<Utc>,
    #[serde(default)]
    pub read_by: u32,
    #[serde(default)]
    pub total_recipients: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Pinned announcements are listed above the regular ones.
    #[serde(default, alias = "is_pinned", alias = "is_sticky")]
    pub pinned: bool,
}

impl Record for Announcement {
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["priority", "category"];
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "content", "tags"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "priority" => Some(self.priority.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.published_date
    }
}
