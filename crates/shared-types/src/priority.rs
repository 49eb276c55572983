use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::FilterOption;
use crate::error::PortalError;

/// Urgency of a submission or announcement.
///
/// Submissions only use `High`, `Medium` and `Low`; `Urgent` is reserved
/// for announcements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Options of the announcement priority select box.
    pub fn filter_options() -> Vec<FilterOption> {
        let mut options = vec![FilterOption::new("all", "All Priorities")];
        options.extend(Self::ALL.iter().map(|p| FilterOption::new(p.as_str(), p.label())));
        options
    }

    /// Options of the approval queue priority select box (no `urgent`).
    pub fn submission_filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("all", "All Priorities"),
            FilterOption::new("high", "High Priority"),
            FilterOption::new("medium", "Medium Priority"),
            FilterOption::new("low", "Low Priority"),
        ]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PortalError::bad_request(format!("Unknown priority '{s}'")))
    }
}
