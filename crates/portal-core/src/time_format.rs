//! Relative ("3 hours ago") and absolute ("Nov 1, 2024") timestamp labels.
//!
//! Absolute labels use the portal's en-US style and are rendered in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared_types::{PortalError, Record, RecordId};
use std::collections::BTreeMap;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PortalError> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            PortalError::format(format!("Malformed timestamp '{value}'"))
                .with_field("timestamp", "expected RFC 3339 or YYYY-MM-DD")
        })
}

/// Label `timestamp` relative to `now`.
///
/// Elapsed whole minutes pick the unit: under an hour in minutes, under a
/// day in hours, otherwise days. Values are floored. A timestamp after
/// `now` is rejected.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Result<String, PortalError> {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed < chrono::Duration::zero() {
        return Err(PortalError::format(format!(
            "Timestamp {} is later than reference time {}",
            timestamp.to_rfc3339(),
            now.to_rfc3339()
        )));
    }

    let minutes = elapsed.num_minutes();
    let label = if minutes < MINUTES_PER_HOUR {
        with_unit(minutes, "minute")
    } else if minutes < MINUTES_PER_DAY {
        with_unit(minutes / MINUTES_PER_HOUR, "hour")
    } else {
        with_unit(minutes / MINUTES_PER_DAY, "day")
    };
    Ok(format!("{label} ago"))
}

/// [`relative_label`] for a timestamp still in string form.
pub fn relative_label_str(timestamp: &str, now: DateTime<Utc>) -> Result<String, PortalError> {
    relative_label(parse_timestamp(timestamp)?, now)
}

fn with_unit(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// "Nov 1, 2024"
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// "Nov 1, 2024, 10:30 AM"
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// "November 1, 2024, 10:30 AM", as the announcement board shows it.
pub fn format_date_time_long(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Display labels for one record's creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLabels {
    pub relative: String,
    pub absolute: String,
}

impl TimeLabels {
    pub fn new(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, PortalError> {
        Ok(Self {
            relative: relative_label(timestamp, now)?,
            absolute: format_date_time(timestamp),
        })
    }
}

/// Labels for every record, keyed by id. Fails on the first record whose
/// timestamp is later than `now`.
pub fn time_labels<'a, R, I>(
    records: I,
    now: DateTime<Utc>,
) -> Result<BTreeMap<RecordId, TimeLabels>, PortalError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .map(|record| {
            TimeLabels::new(record.created_at(), now)
                .map(|labels| (record.id(), labels))
                .map_err(|e| e.with_field("id", record.id().to_string()))
        })
        .collect()
}
