use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{initials, FilterOption, Record, RecordId};
use crate::error::PortalError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Portal role of a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    AdminFull,
    AdminApproval,
    Officer,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::AdminFull,
        UserRole::AdminApproval,
        UserRole::Officer,
        UserRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::AdminFull => "admin_full",
            UserRole::AdminApproval => "admin_approval",
            UserRole::Officer => "officer",
            UserRole::Viewer => "viewer",
        }
    }

    /// Short label used in user tables.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::AdminFull => "Admin (Full)",
            UserRole::AdminApproval => "Admin (Approval)",
            UserRole::Officer => "Officer",
            UserRole::Viewer => "Viewer",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::AdminFull | UserRole::AdminApproval)
    }

    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("all", "All Roles"),
            FilterOption::new("admin_full", "Admin (Full Control)"),
            FilterOption::new("admin_approval", "Admin (Approval Only)"),
            FilterOption::new("officer", "Officer"),
            FilterOption::new("viewer", "Viewer"),
        ]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PortalError::bad_request(format!("Unknown role '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Account status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 3] = [
        AccountStatus::Active,
        AccountStatus::Inactive,
        AccountStatus::Suspended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Suspended => "Suspended",
        }
    }

    pub fn filter_options() -> Vec<FilterOption> {
        let mut options = vec![FilterOption::new("all", "All Status")];
        options.extend(Self::ALL.iter().map(|s| FilterOption::new(s.as_str(), s.label())));
        options
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PortalError::bad_request(format!("Unknown account status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// User account
// ---------------------------------------------------------------------------

/// A registered portal user as listed in user management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub organization: String,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub submissions_count: u32,
    /// Whole-percent approval rate of the user's submissions.
    #[serde(default)]
    pub approval_rate: u32,
}

impl UserAccount {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Record for UserAccount {
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["role", "status"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "organization"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "role" => Some(self.role.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.organization.as_str(),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_date
    }
}
