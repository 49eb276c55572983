//! Filtering, aggregation and timestamp labelling for the transparency
//! portal's record listings (submissions, users, announcements, activity).
//!
//! Every operation is a pure function over records already in memory.
//! Record types and filter settings live in `shared_types`.

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod filter;
pub mod store;
pub mod summary;
pub mod time_format;

pub use aggregate::{count_by, count_matching, count_where, rate, Metrics, Rate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::RecordStore;
pub use summary::{
    monthly_trend, ActivitySummary, AnnouncementReach, OrganizationStats, SubmissionSummary,
    SubmissionTrend, UserStats,
};
pub use time_format::{format_date, format_date_time, format_date_time_long, relative_label, TimeLabels};
