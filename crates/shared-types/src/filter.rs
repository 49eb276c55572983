use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::common::{FilterOption, ALL_SENTINEL};
use crate::error::PortalError;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The value chosen in one categorical filter.
///
/// `All` disables the predicate. It is produced by the `"all"` sentinel
/// (compared ASCII case-insensitively, the public viewer pages send `"All"`),
/// so a literal `"all"` value can never be selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether a record's field value passes this selection.
    /// A missing field only passes `All`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value.map_or(false, |v| v == wanted),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::parse(&value)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL_SENTINEL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Look-back window of the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateRange {
    LastDays(u32),
    AllTime,
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::LastDays(7)
    }
}

impl DateRange {
    /// Day counts offered by the activity log's range select box.
    pub const PRESET_DAYS: [u32; 3] = [7, 30, 90];

    pub fn label(&self) -> String {
        match self {
            DateRange::LastDays(90) => "Last 3 months".to_string(),
            DateRange::LastDays(days) => format!("Last {days} days"),
            DateRange::AllTime => "All time".to_string(),
        }
    }

    /// Oldest timestamp still inside the window, or `None` for all time.
    ///
    /// A window reaching past the earliest representable instant has no
    /// lower bound either.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::LastDays(days) => {
                Duration::try_days(i64::from(*days)).and_then(|span| now.checked_sub_signed(span))
            }
            DateRange::AllTime => None,
        }
    }

    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("7", "Last 7 days"),
            FilterOption::new("30", "Last 30 days"),
            FilterOption::new("90", "Last 3 months"),
            FilterOption::new("all", "All time"),
        ]
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::LastDays(days) => write!(f, "{days}"),
            DateRange::AllTime => f.write_str(ALL_SENTINEL),
        }
    }
}

impl FromStr for DateRange {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(DateRange::AllTime);
        }
        s.parse::<u32>()
            .ok()
            .filter(|days| Self::PRESET_DAYS.contains(days))
            .map(DateRange::LastDays)
            .ok_or_else(|| {
                PortalError::bad_request(format!("Unknown date range '{s}'"))
                    .with_field("range", "expected 7, 30, 90 or all")
            })
    }
}

impl TryFrom<String> for DateRange {
    type Error = PortalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.to_string()
    }
}

// ---------------------------------------------------------------------------
// FilterConfig
// ---------------------------------------------------------------------------

/// Active filter values for one record listing.
///
/// Fields absent from `categorical` are unrestricted. `since` is the
/// resolved lower bound of a [`DateRange`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub categorical: BTreeMap<String, Selection>,
    #[serde(default)]
    pub search_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection for a categorical field.
    pub fn with(mut self, field: impl Into<String>, selection: impl Into<Selection>) -> Self {
        self.categorical.insert(field.into(), selection.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict to records created inside `range`, measured back from `now`.
    pub fn within(mut self, range: DateRange, now: DateTime<Utc>) -> Self {
        self.since = range.cutoff(now);
        self
    }

    pub fn selection(&self, field: &str) -> Option<&Selection> {
        self.categorical.get(field)
    }

    /// Lower-cased search query; `None` only for the empty string.
    ///
    /// Whitespace is significant: `" report"` does not match `"Report Q4"`.
    pub fn normalized_query(&self) -> Option<String> {
        (!self.search_text.is_empty()).then(|| self.search_text.to_lowercase())
    }

    /// True when no predicate is active and the filter returns its input.
    pub fn is_unrestricted(&self) -> bool {
        self.categorical.values().all(Selection::is_all)
            && self.normalized_query().is_none()
            && self.since.is_none()
    }
}
