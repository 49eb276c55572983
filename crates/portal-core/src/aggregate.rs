//! Counts and percentage rates over record sets.
//!
//! All percentages in the portal (approval rate, read percentage,
//! processing rate) go through the single [`rate`] function.

use serde::Serialize;
use shared_types::Record;
use std::collections::BTreeMap;
use std::fmt;

/// Number of records per value of a categorical field.
///
/// Records without the field are not counted.
pub fn count_by<'a, R, I>(records: I, field: &str) -> BTreeMap<String, usize>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(value) = record.categorical(field) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Number of records whose `field` equals `value`.
pub fn count_where<'a, R, I>(records: I, field: &str, value: &str) -> usize
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| record.categorical(field) == Some(value))
        .count()
}

/// Number of records satisfying an arbitrary predicate.
pub fn count_matching<'a, R, I, P>(records: I, pred: P) -> usize
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    P: Fn(&R) -> bool,
{
    records.into_iter().filter(|record| pred(*record)).count()
}

// ---------------------------------------------------------------------------
// Rate
// ---------------------------------------------------------------------------

/// A percentage in `0.0..=100.0`.
///
/// An empty denominator yields `0.0` instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(into = "f64")]
pub struct Rate {
    percent: f64,
}

impl Rate {
    pub const ZERO: Rate = Rate { percent: 0.0 };

    pub fn of(part: usize, total: usize) -> Self {
        if total == 0 {
            return Rate::ZERO;
        }
        if part > total {
            tracing::warn!(part, total, "rate numerator exceeds total, clamping to 100%");
            return Rate { percent: 100.0 };
        }
        Rate {
            percent: part as f64 / total as f64 * 100.0,
        }
    }

    /// Percentage rounded to one decimal place, as displayed in summaries.
    pub fn value(&self) -> f64 {
        (self.percent * 10.0).round() / 10.0
    }

    /// Percentage rounded to a whole number, as used by progress bars.
    pub fn whole(&self) -> u32 {
        self.percent.round() as u32
    }

    /// Unrounded percentage.
    pub fn raw(&self) -> f64 {
        self.percent
    }
}

impl From<Rate> for f64 {
    fn from(rate: Rate) -> Self {
        rate.value()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value())
    }
}

/// `part / total * 100`, guarded against a zero total.
pub fn rate(part: usize, total: usize) -> Rate {
    Rate::of(part, total)
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Named numeric summary values handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, f64>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, name: &str, value: usize) -> Self {
        self.0.insert(name.to_string(), value as f64);
        self
    }

    pub fn rate(mut self, name: &str, value: Rate) -> Self {
        self.0.insert(name.to_string(), value.value());
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}
