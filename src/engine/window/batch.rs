use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::group_key::GroupKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub logical_type: String,
}

/// One group and its event count for a closed window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub key: GroupKey,
    pub count: u64,
}

impl ResultRow {
    pub fn new(key: GroupKey, count: u64) -> Self {
        Self { key, count }
    }

    /// Renders the row as an object keyed by the output column names.
    pub fn to_payload(&self, group_field: &str, count_alias: &str) -> Value {
        let mut payload = Map::new();
        payload.insert(group_field.to_string(), json!(self.key.as_str()));
        payload.insert(count_alias.to_string(), json!(self.count));
        Value::Object(payload)
    }
}

/// Rows emitted by a single flush, ordered by group key.
#[derive(Debug, Clone, Serialize)]
pub struct WindowBatch {
    pub sequence: u64,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub rows: Vec<ResultRow>,
}

impl WindowBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count_for(&self, key: &GroupKey) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| &row.key == key)
            .map(|row| row.count)
    }

    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// `(key, count)` pairs, convenient for assertions and display.
    pub fn pairs(&self) -> Vec<(Option<&str>, u64)> {
        self.rows
            .iter()
            .map(|row| (row.key.as_str(), row.count))
            .collect()
    }

    pub fn to_payloads(&self, group_field: &str, count_alias: &str) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| row.to_payload(group_field, count_alias))
            .collect()
    }
}
