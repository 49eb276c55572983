//! In-memory record collection for one listing.
//!
//! The store owns its records in insertion order, which is also the order
//! every filter result preserves.

use serde::de::DeserializeOwned;
use shared_types::{FilterConfig, PortalError, Record, RecordId};
use std::collections::{BTreeMap, HashMap};

use crate::clock::Clock;
use crate::time_format::{time_labels, TimeLabels};
use crate::{aggregate, filter};

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    index: HashMap<RecordId, usize>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Build a store, rejecting duplicate ids and records reviewed before
    /// they were created.
    #[tracing::instrument(skip_all, fields(count = records.len()))]
    pub fn new(records: Vec<R>) -> Result<Self, PortalError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let id = record.id();
            if index.insert(id, pos).is_some() {
                tracing::warn!(id, "duplicate record id");
                return Err(PortalError::conflict(format!("Duplicate record id {id}"))
                    .with_field("id", format!("{id} appears more than once")));
            }
            if let Some(reviewed) = record.reviewed_at() {
                if reviewed < record.created_at() {
                    let mut fields = HashMap::new();
                    fields.insert(
                        "reviewed_at".to_string(),
                        "must not precede the creation timestamp".to_string(),
                    );
                    return Err(PortalError::validation(
                        format!("Record {id} was reviewed before it was created"),
                        fields,
                    ));
                }
            }
        }
        Ok(Self { records, index })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// Like [`RecordStore::get`], but a missing id is an error.
    pub fn require(&self, id: RecordId) -> Result<&R, PortalError> {
        self.get(id)
            .ok_or_else(|| PortalError::not_found(format!("Record {id} not found")))
    }

    pub fn filter(&self, config: &FilterConfig) -> Vec<&R> {
        filter::apply(&self.records, config)
    }

    pub fn count_by(&self, field: &str) -> BTreeMap<String, usize> {
        aggregate::count_by(&self.records, field)
    }

    pub fn time_labels(&self, clock: &dyn Clock) -> Result<BTreeMap<RecordId, TimeLabels>, PortalError> {
        time_labels(&self.records, clock.now())
    }
}

impl<R: Record + DeserializeOwned> RecordStore<R> {
    /// Load a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, PortalError> {
        let records: Vec<R> = serde_json::from_str(json)
            .map_err(|e| PortalError::bad_request(format!("Invalid record data: {e}")))?;
        Self::new(records)
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
