use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::CounterField;

/// One observation of an entity's counters.
///
/// Population: upstream collector, one record per entity per poll.
/// Snapshots of an entity are expected in ascending `timestamp` order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub entity_id: String,
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub counters: BTreeMap<String, u64>,
}

impl Snapshot {
    pub fn new(entity_id: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            entity_id: entity_id.into(),
            timestamp,
            counters: BTreeMap::new(),
        }
    }

    /// Builder-style counter insertion.
    pub fn with_counter(mut self, field: CounterField, value: u64) -> Self {
        self.counters.insert(field.as_str().to_string(), value);
        self
    }

    pub fn counter(&self, field: CounterField) -> Option<u64> {
        self.counters.get(field.as_str()).copied()
    }
}
