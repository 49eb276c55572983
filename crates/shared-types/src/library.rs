use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{FilterOption, Record, RecordId};

/// Categories of the public document library.
pub const LIBRARY_CATEGORIES: &[&str] = &[
    "Financial",
    "Budget",
    "Policy",
    "Performance",
    "Administrative",
    "Audit",
];

/// Category buttons of the document library, headed by "All".
pub fn library_category_options() -> Vec<FilterOption> {
    let mut options = vec![FilterOption::new("all", "All")];
    options.extend(LIBRARY_CATEGORIES.iter().map(|&c| FilterOption::new(c, c)));
    options
}

/// An official document published to the public library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    /// Publication day; the library has no time of day.
    pub upload_date: NaiveDate,
    /// Human-readable size ("2.3 MB").
    pub size: String,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub description: String,
}

impl Record for LibraryDocument {
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["category"];
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    /// Midnight UTC of the upload day.
    fn created_at(&self) -> DateTime<Utc> {
        self.upload_date.and_time(NaiveTime::MIN).and_utc()
    }
}
