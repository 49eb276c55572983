//! Predicate filter over record listings.
//!
//! A [`FilterConfig`] is compiled into a [`Predicate`] that AND-combines:
//! 1. one equality test per categorical selection (`All` disables it),
//! 2. a case-insensitive substring test across the record's search fields,
//! 3. an optional lower bound on the record's creation timestamp.
//!
//! Filtering is stable: matching records keep their original order.

use shared_types::{FilterConfig, Record};

/// A [`FilterConfig`] prepared for repeated evaluation.
#[derive(Debug, Clone)]
pub struct Predicate<'c> {
    config: &'c FilterConfig,
    query: Option<String>,
}

impl<'c> Predicate<'c> {
    pub fn new(config: &'c FilterConfig) -> Self {
        Self {
            config,
            query: config.normalized_query(),
        }
    }

    pub fn test<R: Record>(&self, record: &R) -> bool {
        self.matches_categorical(record) && self.matches_since(record) && self.matches_query(record)
    }

    fn matches_categorical<R: Record>(&self, record: &R) -> bool {
        self.config
            .categorical
            .iter()
            .all(|(field, selection)| selection.matches(record.categorical(field)))
    }

    fn matches_since<R: Record>(&self, record: &R) -> bool {
        self.config
            .since
            .map_or(true, |cutoff| record.created_at() >= cutoff)
    }

    fn matches_query<R: Record>(&self, record: &R) -> bool {
        match &self.query {
            None => true,
            Some(query) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query.as_str())),
        }
    }
}

/// Whether a single record passes every active predicate.
pub fn matches<R: Record>(record: &R, config: &FilterConfig) -> bool {
    Predicate::new(config).test(record)
}

/// Records passing every active predicate, in their original order.
#[tracing::instrument(skip_all, fields(fields = config.categorical.len()))]
pub fn apply<'a, R, I>(records: I, config: &FilterConfig) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let predicate = Predicate::new(config);
    let mut seen = 0usize;
    let matched: Vec<&R> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|record| predicate.test(*record))
        .collect();
    tracing::debug!(seen, matched = matched.len(), "filtered records");
    matched
}

/// Stable split into (`pred` true, `pred` false), e.g. pinned vs. regular
/// announcements.
pub fn partition_by<'a, R, I, P>(records: I, pred: P) -> (Vec<&'a R>, Vec<&'a R>)
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    P: Fn(&R) -> bool,
{
    records.into_iter().partition(|record| pred(*record))
}
