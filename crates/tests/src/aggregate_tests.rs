use crate::common::{activities, announcements, submissions, users};
use portal_core::{count_by, count_matching, count_where, rate};
use pretty_assertions::assert_eq;
use shared_types::{FilterConfig, Submission, UserAccount};
use std::collections::BTreeMap;

fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn submissions_by_status() {
    let store = submissions();
    assert_eq!(
        store.count_by("status"),
        counts(&[("approved", 1), ("pending", 3), ("rejected", 1)])
    );
}

#[test]
fn announcements_by_priority() {
    assert_eq!(
        announcements().count_by("priority"),
        counts(&[("high", 2), ("medium", 3), ("urgent", 1)])
    );
}

#[test]
fn counts_over_a_filtered_subset() {
    let store = activities();
    let you = store.filter(&FilterConfig::new().search("you"));
    assert_eq!(count_where(you.iter().copied(), "type", "submission"), 2);
    assert_eq!(count_by(you.iter().copied(), "type").values().sum::<usize>(), you.len());
}

#[test]
fn unknown_field_counts_nothing() {
    assert!(users().count_by("department").is_empty());
    assert_eq!(count_where(&submissions(), "department", "x"), 0);
}

#[test]
fn count_matching_with_closure() {
    let store = users();
    let with_submissions = count_matching(&store, |u: &UserAccount| u.submissions_count > 0);
    assert_eq!(with_submissions, 5);
    let reviewed = count_matching(&submissions(), |s: &Submission| s.reviewed_by.is_some());
    assert_eq!(reviewed, 2);
}

#[test]
fn approval_rate_over_empty_set_is_zero() {
    let empty: Vec<&Submission> = Vec::new();
    let approved = count_where(empty.iter().copied(), "status", "approved");
    assert_eq!(rate(approved, empty.len()).value(), 0.0);
}

#[test]
fn rates_stay_within_bounds_on_fixtures() {
    let store = users();
    for (_, n) in store.count_by("role") {
        let r = rate(n, store.len()).value();
        assert!((0.0..=100.0).contains(&r));
    }
}
