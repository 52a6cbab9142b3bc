//! Result of a forward lookup, keyed by record type.
//!
//! Serializes to the shape
//! `{"A": ["<rr>", ...], "MX": {"error": "<message>"}, ...}`
//! with keys in lexicographic order. Types that produced neither answers
//! nor an error are absent.

use crate::RecordType;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordOutcome {
    Records(Vec<String>),
    Failed { error: String },
}

impl RecordOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        RecordOutcome::Failed {
            error: error.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RecordOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookupReport {
    entries: BTreeMap<String, RecordOutcome>,
}

impl LookupReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the answers for `record_type`. An empty list leaves the report unchanged.
    pub fn insert_records(&mut self, record_type: RecordType, records: Vec<String>) {
        if records.is_empty() {
            return;
        }
        self.entries
            .insert(record_type.to_string(), RecordOutcome::Records(records));
    }

    pub fn insert_error(&mut self, record_type: RecordType, error: impl Into<String>) {
        self.entries
            .insert(record_type.to_string(), RecordOutcome::failed(error));
    }

    pub fn get(&self, record_type: RecordType) -> Option<&RecordOutcome> {
        self.entries.get(record_type.as_str())
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.entries.contains_key(record_type.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.entries.values().filter(|o| o.is_failure()).count()
    }
}
