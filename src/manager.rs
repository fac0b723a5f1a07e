//! Upload orchestration
//!
//! [`CsvManager`] owns both stores and the repository that persists them. Every
//! mutating operation works on staged copies: the new state is written to storage
//! first and only then replaces the in-memory state, so a failed upload leaves both
//! the stores and their persisted documents as they were.

use tracing::{info, warn};

use crate::config::IngestConfig;
use crate::convert::{CoercionReport, convert_entry};
use crate::import::{CSVImporter, ImportError};
use crate::models::{DatasetType, IngestionEntry};
use crate::storage::{StorageBackend, StorageError};
use crate::store::{CsvFileStore, DataStore, PersistedStore, StoreRepository};
use crate::validation::{ValidationError, validate_csv_file_name};

/// Error type for manager operations
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result of a successful upload
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Entry now live for the dataset
    pub entry: IngestionEntry,
    /// Number of typed records stored for the dataset
    pub records: usize,
    /// Cells that fell back to their default value
    pub coercion_warnings: CoercionReport,
}

/// Coordinates the import pipeline with the two persisted stores
pub struct CsvManager<B: StorageBackend> {
    repository: StoreRepository<B>,
    importer: CSVImporter,
    require_csv_extension: bool,
    csv_files: CsvFileStore,
    data: DataStore,
}

impl<B: StorageBackend> CsvManager<B> {
    /// Create a manager with empty stores. Nothing is read from storage.
    pub fn new(storage: B, config: &IngestConfig) -> Self {
        Self {
            repository: StoreRepository::new(storage),
            importer: CSVImporter::from_config(config),
            require_csv_extension: config.ingest.require_csv_extension,
            csv_files: CsvFileStore::new(),
            data: DataStore::new(),
        }
    }

    /// Create a manager and load both stores from storage
    pub async fn open(storage: B, config: &IngestConfig) -> Result<Self, ManagerError> {
        let mut manager = Self::new(storage, config);
        manager.csv_files = manager.repository.load().await?;
        manager.data = manager.repository.load().await?;
        info!(
            "Opened stores with {} dataset(s) and {} row(s)",
            manager.csv_files.csv_files().len(),
            manager.csv_files.total_records()
        );
        Ok(manager)
    }

    pub fn csv_files(&self) -> &CsvFileStore {
        &self.csv_files
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    pub fn storage(&self) -> &B {
        self.repository.storage()
    }

    /// Run the import pipeline without touching any store
    pub fn process_csv(
        &self,
        file_name: &str,
        text: &str,
        dataset: DatasetType,
    ) -> Result<IngestionEntry, ManagerError> {
        Ok(self.importer.import(file_name, text, dataset)?)
    }

    /// Import a file into its dataset slot, replacing any previous upload of that slot.
    ///
    /// # Errors
    ///
    /// Validation, import and storage errors. On any error neither store changes.
    pub async fn upload(
        &mut self,
        file_name: &str,
        text: &str,
        dataset: DatasetType,
    ) -> Result<UploadOutcome, ManagerError> {
        if self.require_csv_extension {
            validate_csv_file_name(file_name)?;
        }

        let entry = self.process_csv(file_name, text, dataset)?;
        let conversion = convert_entry(&entry);
        let records = conversion.records.len();

        let mut csv_files = self.csv_files.clone();
        csv_files.add_csv_file(entry.clone());
        let mut data = self.data.clone();
        data.replace_records(conversion.records);

        self.commit(csv_files, data).await?;

        info!(
            "Uploaded {} as {}: {} record(s), {} coercion warning(s)",
            file_name,
            dataset,
            records,
            conversion.report.len()
        );
        Ok(UploadOutcome {
            entry,
            records,
            coercion_warnings: conversion.report,
        })
    }

    /// Read a file from disk and [`upload`](Self::upload) it
    #[cfg(feature = "native-fs")]
    pub async fn upload_file(
        &mut self,
        path: &std::path::Path,
        dataset: DatasetType,
    ) -> Result<UploadOutcome, ManagerError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ValidationError::InvalidFormat("file name", path.display().to_string())
            })?
            .to_string();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ImportError::IoError(format!("{}: {}", path.display(), e)))?;
        crate::validation::validate_csv_file_size(metadata.len())?;

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ImportError::IoError(format!("{}: {}", path.display(), e)))?;

        self.upload(&file_name, &text, dataset).await
    }

    /// Remove a dataset's entry and clear its typed records.
    ///
    /// Returns the removed entry, or `None` when the dataset had no upload.
    pub async fn remove_dataset(
        &mut self,
        dataset: DatasetType,
    ) -> Result<Option<IngestionEntry>, ManagerError> {
        let mut csv_files = self.csv_files.clone();
        let removed = csv_files.remove_by_name(dataset);
        let mut data = self.data.clone();
        data.clear_dataset(dataset);

        self.commit(csv_files, data).await?;

        match &removed {
            Some(entry) => info!("Removed {} ({} row(s))", dataset, entry.record_count()),
            None => info!("No upload for {}, cleared its records", dataset),
        }
        Ok(removed)
    }

    /// Empty both stores
    pub async fn clear_all(&mut self) -> Result<(), ManagerError> {
        let mut data = self.data.clone();
        data.clear_all_data();

        self.commit(CsvFileStore::new(), data).await?;
        info!("Cleared all datasets");
        Ok(())
    }

    /// Persist staged stores, then swap them in.
    ///
    /// If the second write fails the first document is restored from the current
    /// in-memory state.
    async fn commit(&mut self, csv_files: CsvFileStore, data: DataStore) -> Result<(), StorageError> {
        self.repository.save(&csv_files).await?;

        if let Err(e) = self.repository.save(&data).await {
            warn!("Failed to save {}: {}", DataStore::NAME, e);
            if let Err(rollback) = self.repository.save(&self.csv_files).await {
                warn!("Failed to restore {}: {}", CsvFileStore::NAME, rollback);
            }
            return Err(e);
        }

        self.csv_files = csv_files;
        self.data = data;
        Ok(())
    }
}
