//! Dataset entry store
//!
//! Holds at most one live [`IngestionEntry`] per dataset type. Adding an entry whose
//! dataset already has one replaces it in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DatasetType, IngestionEntry};

use super::repository::PersistedStore;

/// Persisted store of uploaded dataset entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvFileStore {
    #[serde(default)]
    pub csv_files: Vec<IngestionEntry>,
}

impl PersistedStore for CsvFileStore {
    const NAME: &'static str = "csv-files-store";
    const VERSION: u32 = 1;
}

impl CsvFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csv_files(&self) -> &[IngestionEntry] {
        &self.csv_files
    }

    pub fn set_csv_files(&mut self, files: Vec<IngestionEntry>) {
        self.csv_files = files;
    }

    /// Add an entry, replacing the entry of the same dataset if one exists
    pub fn add_csv_file(&mut self, entry: IngestionEntry) {
        match self.csv_files.iter_mut().find(|f| f.name == entry.name) {
            Some(existing) => {
                debug!("Replacing {} entry {}", entry.name, existing.id);
                *existing = entry;
            }
            None => self.csv_files.push(entry),
        }
    }

    /// Replace the entry with the given id. Returns `false` when no entry matches.
    pub fn update_csv_file(&mut self, id: &str, entry: IngestionEntry) -> bool {
        match self.csv_files.iter_mut().find(|f| f.id == id) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id. Returns `false` when no entry matches.
    pub fn remove_csv_file(&mut self, id: &str) -> bool {
        let before = self.csv_files.len();
        self.csv_files.retain(|f| f.id != id);
        self.csv_files.len() != before
    }

    /// Remove the entry of a dataset, returning it
    pub fn remove_by_name(&mut self, name: DatasetType) -> Option<IngestionEntry> {
        let idx = self.csv_files.iter().position(|f| f.name == name)?;
        Some(self.csv_files.remove(idx))
    }

    pub fn get_by_name(&self, name: DatasetType) -> Option<&IngestionEntry> {
        self.csv_files.iter().find(|f| f.name == name)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&IngestionEntry> {
        self.csv_files.iter().find(|f| f.id == id)
    }

    /// Rows across all live entries
    pub fn total_records(&self) -> usize {
        self.csv_files.iter().map(IngestionEntry::record_count).sum()
    }
}
