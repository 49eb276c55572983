//! Dashboard summary cards built from the generic counters.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use shared_types::{
    AccountStatus, Activity, ActivityType, Announcement, Record, RecordId, Submission,
    SubmissionStatus, UserAccount, UserRole,
};
use std::collections::BTreeMap;

use crate::aggregate::{count_matching, count_where, rate, Metrics, Rate};

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// Approval queue and analytics figures for a set of submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub approval_rate: Rate,
    pub rejection_rate: Rate,
    pub pending_rate: Rate,
    /// Share of submissions that received a decision (approved or rejected).
    pub processed_rate: Rate,
}

impl SubmissionSummary {
    #[tracing::instrument(skip_all)]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let records: Vec<&Submission> = records.into_iter().collect();
        let status = |s: SubmissionStatus| count_where(records.iter().copied(), "status", s.as_str());
        Self::from_counts(
            records.len(),
            status(SubmissionStatus::Approved),
            status(SubmissionStatus::Pending),
            status(SubmissionStatus::Rejected),
        )
    }

    /// Build from pre-aggregated counts (e.g. period totals from analytics).
    pub fn from_counts(total: usize, approved: usize, pending: usize, rejected: usize) -> Self {
        Self {
            total,
            pending,
            approved,
            rejected,
            approval_rate: rate(approved, total),
            rejection_rate: rate(rejected, total),
            pending_rate: rate(pending, total),
            processed_rate: rate(approved + rejected, total),
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new()
            .count("total", self.total)
            .count("pending", self.pending)
            .count("approved", self.approved)
            .count("rejected", self.rejected)
            .rate("approval_rate", self.approval_rate)
            .rate("rejection_rate", self.rejection_rate)
            .rate("pending_rate", self.pending_rate)
            .rate("processed_rate", self.processed_rate)
    }
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

/// Per-organization row of the analytics organization report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationStats {
    pub organization: String,
    pub submissions: usize,
    pub approved: usize,
    pub rejected: usize,
    pub approval_rate: Rate,
    /// Mean days from submission to review over reviewed submissions,
    /// one decimal; `None` while nothing has been reviewed.
    pub avg_processing_days: Option<f64>,
    /// Latest submission or review timestamp.
    pub last_activity: DateTime<Utc>,
}

impl OrganizationStats {
    /// One row per organization, ordered by name.
    #[tracing::instrument(skip_all)]
    pub fn from_records<'a, I>(records: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let mut groups: BTreeMap<&str, Vec<&Submission>> = BTreeMap::new();
        for record in records {
            groups.entry(record.organization.as_str()).or_default().push(record);
        }
        groups
            .into_iter()
            .filter_map(|(organization, group)| Self::from_group(organization, &group))
            .collect()
    }

    fn from_group(organization: &str, group: &[&Submission]) -> Option<Self> {
        let status = |s: SubmissionStatus| count_where(group.iter().copied(), "status", s.as_str());
        let approved = status(SubmissionStatus::Approved);
        let last_activity = group
            .iter()
            .map(|s| s.reviewed_date.map_or(s.submitted_date, |r| r.max(s.submitted_date)))
            .max()?;
        Some(Self {
            organization: organization.to_string(),
            submissions: group.len(),
            approved,
            rejected: status(SubmissionStatus::Rejected),
            approval_rate: rate(approved, group.len()),
            avg_processing_days: average_processing_days(group),
            last_activity,
        })
    }
}

fn average_processing_days(group: &[&Submission]) -> Option<f64> {
    let minutes: Vec<i64> = group
        .iter()
        .filter_map(|s| s.reviewed_date.map(|r| r.signed_duration_since(s.submitted_date).num_minutes()))
        .collect();
    if minutes.is_empty() {
        return None;
    }
    let days = minutes.iter().sum::<i64>() as f64 / minutes.len() as f64 / 1440.0;
    Some((days * 10.0).round() / 10.0)
}

// ---------------------------------------------------------------------------
// Monthly trend
// ---------------------------------------------------------------------------

/// Submissions received in one calendar month (UTC), with how many of
/// them ended approved or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionTrend {
    pub year: i32,
    pub month: u32,
    /// Short month name ("Oct").
    pub label: String,
    pub submissions: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Month-bucketed submission counts in chronological order. Months with no
/// submissions are omitted.
pub fn monthly_trend<'a, I>(records: I) -> Vec<SubmissionTrend>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut months: BTreeMap<(i32, u32), Vec<&Submission>> = BTreeMap::new();
    for record in records {
        let date = record.submitted_date;
        months.entry((date.year(), date.month())).or_default().push(record);
    }
    months
        .into_iter()
        .map(|((year, month), group)| {
            let status = |s: SubmissionStatus| count_where(group.iter().copied(), "status", s.as_str());
            SubmissionTrend {
                year,
                month,
                label: group[0].submitted_date.format("%b").to_string(),
                submissions: group.len(),
                approved: status(SubmissionStatus::Approved),
                rejected: status(SubmissionStatus::Rejected),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// User management header counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub officers: usize,
    /// Both admin roles together.
    pub admins: usize,
}

impl UserStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a UserAccount>,
    {
        let records: Vec<&UserAccount> = records.into_iter().collect();
        Self {
            total: records.len(),
            active: count_where(records.iter().copied(), "status", AccountStatus::Active.as_str()),
            officers: count_where(records.iter().copied(), "role", UserRole::Officer.as_str()),
            admins: count_matching(records.iter().copied(), |u: &UserAccount| u.role.is_admin()),
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new()
            .count("total", self.total)
            .count("active", self.active)
            .count("officers", self.officers)
            .count("admins", self.admins)
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Activity log header counts over the currently filtered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub total: usize,
    pub submissions: usize,
    pub approvals: usize,
    pub rejections: usize,
    pub comments: usize,
}

impl ActivitySummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let records: Vec<&Activity> = records.into_iter().collect();
        let of_type = |t: ActivityType| count_where(records.iter().copied(), "type", t.as_str());
        Self {
            total: records.len(),
            submissions: of_type(ActivityType::Submission),
            approvals: of_type(ActivityType::Approval),
            rejections: of_type(ActivityType::Rejection),
            comments: of_type(ActivityType::Comment),
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new()
            .count("total", self.total)
            .count("submissions", self.submissions)
            .count("approvals", self.approvals)
            .count("rejections", self.rejections)
            .count("comments", self.comments)
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// Read percentage of each announcement, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnouncementReach(BTreeMap<RecordId, Rate>);

impl AnnouncementReach {
    pub fn read_rate(announcement: &Announcement) -> Rate {
        rate(
            announcement.read_by as usize,
            announcement.total_recipients as usize,
        )
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Announcement>,
    {
        Self(
            records
                .into_iter()
                .map(|a| (a.id(), Self::read_rate(a)))
                .collect(),
        )
    }

    pub fn get(&self, id: RecordId) -> Option<Rate> {
        self.0.get(&id).copied()
    }

    /// Whole-percent read rate per announcement, as the reach bars show it.
    pub fn whole_percentages(&self) -> BTreeMap<RecordId, u32> {
        self.0.iter().map(|(id, r)| (*id, r.whole())).collect()
    }
}
