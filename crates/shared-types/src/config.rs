use serde::{Deserialize, Serialize};

use crate::filter::{DateRange, Selection};

/// Initial filter state of the admin approval queue.
///
/// The queue opens on pending submissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApprovalDefaults {
    #[serde(default = "pending_selection")]
    pub status: Selection,
    #[serde(default)]
    pub priority: Selection,
}

impl Default for ApprovalDefaults {
    fn default() -> Self {
        Self {
            status: pending_selection(),
            priority: Selection::All,
        }
    }
}

fn pending_selection() -> Selection {
    Selection::Only("pending".to_string())
}

/// Initial filter state of user management.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserDefaults {
    #[serde(default)]
    pub role: Selection,
    #[serde(default)]
    pub status: Selection,
}

/// Initial filter state of the announcement board.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnnouncementDefaults {
    #[serde(default)]
    pub priority: Selection,
    #[serde(default)]
    pub category: Selection,
}

/// Initial filter state of the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActivityDefaults {
    #[serde(default, rename = "type")]
    pub activity_type: Selection,
    #[serde(default)]
    pub range: DateRange,
}

/// Top-level config file structure matching `portal.toml`.
///
/// Every section and key is optional; a missing or empty file yields the
/// same filters the dashboard pages open with.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub approvals: ApprovalDefaults,
    #[serde(default)]
    pub users: UserDefaults,
    #[serde(default)]
    pub announcements: AnnouncementDefaults,
    #[serde(default)]
    pub activity: ActivityDefaults,
}
