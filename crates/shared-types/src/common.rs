use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sequential record identity. Assigned at creation, never reassigned.
pub type RecordId = u64;

/// Filter value that disables a categorical predicate.
pub const ALL_SENTINEL: &str = "all";

/// Generic, schema-driven view of a portal record.
///
/// Every record type (submission, user, announcement, activity) exposes
/// its categorical fields by name and its free-text fields as a flat list,
/// which is all the filter and aggregator need to know about it.
pub trait Record {
    /// Names accepted by [`Record::categorical`].
    const CATEGORICAL_FIELDS: &'static [&'static str];
    /// Names of the fields returned by [`Record::search_fields`], in order.
    const SEARCH_FIELDS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// Value of a categorical field, or `None` if the record has no such field.
    fn categorical(&self, field: &str) -> Option<&str>;

    /// Every free-text value searched by the filter. List-valued fields
    /// (tags) contribute one entry per element.
    fn search_fields(&self) -> Vec<&str>;

    fn created_at(&self) -> DateTime<Utc>;

    /// Review or last-modification timestamp, when the record has one.
    fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// One entry of a filter select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FilterOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Split a display name into upper-case initials ("John Doe" -> "JD").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
