use crate::common::{activities, submissions, users};
use portal_core::RecordStore;
use pretty_assertions::assert_eq;
use shared_types::{PortalErrorKind, Submission, SubmissionStatus, UserAccount};

#[test]
fn fixtures_load_in_order() {
    let store = submissions();
    assert_eq!(store.len(), 5);
    let ids: Vec<u64> = store.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(users().len(), 7);
    assert_eq!(activities().len(), 10);
}

#[test]
fn get_and_require() {
    let store = submissions();
    let rejected = store.get(5).unwrap();
    assert_eq!(rejected.status, SubmissionStatus::Rejected);
    assert_eq!(rejected.reviewed_by.as_deref(), Some("Finance Admin"));
    assert!(store.get(42).is_none());

    let err = store.require(42).unwrap_err();
    assert_eq!(err.kind, PortalErrorKind::NotFound);
}

#[test]
fn duplicate_ids_rejected_on_load() {
    let mut records: Vec<UserAccount> = users().records().to_vec();
    let mut copy = records[0].clone();
    copy.name = "Someone Else".into();
    records.push(copy);

    let err = RecordStore::new(records).unwrap_err();
    assert_eq!(err.kind, PortalErrorKind::Conflict);
}

#[test]
fn review_must_follow_submission() {
    let mut records: Vec<Submission> = submissions().records().to_vec();
    let first = &mut records[0];
    first.status = SubmissionStatus::Approved;
    first.reviewed_date = Some(first.submitted_date - chrono::Duration::hours(1));

    let err = RecordStore::new(records).unwrap_err();
    assert_eq!(err.kind, PortalErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("reviewed_at"));
}

#[test]
fn unknown_enum_value_is_bad_request() {
    let json = r#"[{
        "id": 1, "name": "X", "email": "x@example.com", "role": "superuser",
        "organization": "Nowhere", "status": "active",
        "created_date": "2024-01-01T00:00:00Z"
    }]"#;
    let err = RecordStore::<UserAccount>::from_json(json).unwrap_err();
    assert_eq!(err.kind, PortalErrorKind::BadRequest);
}

#[test]
fn empty_json_array_is_an_empty_store() {
    let store = RecordStore::<Submission>::from_json("[]").unwrap();
    assert!(store.is_empty());
}
