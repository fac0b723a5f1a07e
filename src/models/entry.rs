//! Ingestion entry model
//!
//! An [`IngestionEntry`] is the unit handed to the entry store after one upload: the
//! mapped rows of a single CSV file plus provenance. Rows are kept in their generic
//! form ([`RawRecord`], a key to nullable string mapping) so the typed coercion in
//! [`crate::convert`] can be re-run from persisted state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::enums::{DatasetType, HistoryAction};

/// One mapped CSV row: normalized header key to cell value, `None` for sentinel cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same key (last wins)
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.insert(key.into(), value);
    }

    /// Whether the key is present, even if its value is null
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Non-null, non-empty value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// First non-null value among several alias keys, in order
    pub fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Raw slot for a key: `None` when absent, `Some(None)` when present but null
    pub fn slot(&self, key: &str) -> Option<Option<&str>> {
        self.fields.get(key).map(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Provenance of one upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: DateTime<Utc>,
    pub action: HistoryAction,
    pub file_name: String,
}

/// Result of ingesting one CSV file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionEntry {
    pub id: String,
    /// Dataset slot this entry belongs to
    pub name: DatasetType,
    pub last_update: DateTime<Utc>,
    /// Mapped rows in source order, one per non-blank data line
    pub content: Vec<RawRecord>,
    /// Append-only provenance
    pub history: Vec<HistoryEntry>,
}

impl IngestionEntry {
    /// Assemble a fresh entry for one upload with a single `initial` history record.
    pub fn new(name: DatasetType, file_name: impl Into<String>, content: Vec<RawRecord>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            last_update: now,
            content,
            history: vec![HistoryEntry {
                date: now,
                action: HistoryAction::Initial,
                file_name: file_name.into(),
            }],
        }
    }

    /// File name of the most recent upload
    pub fn latest_file_name(&self) -> Option<&str> {
        self.history.last().map(|h| h.file_name.as_str())
    }

    pub fn record_count(&self) -> usize {
        self.content.len()
    }
}
