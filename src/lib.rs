//! FC Analytics SDK - CSV ingestion and record stores for the football analytics dashboard
//!
//! Provides:
//! - The CSV ingestion pipeline (line splitting, delimiter detection, quote-aware
//!   tokenizing, header normalization, row mapping, entry assembly)
//! - Typed record conversion for players, injuries, evaluations, GPS sessions and
//!   statistics
//! - Versioned persisted stores over pluggable storage backends
//! - Upload orchestration with replace-by-dataset semantics
//!
//! # Example
//!
//! ```rust
//! use fc_analytics_sdk::{CsvManager, DatasetType, IngestConfig, MemoryStorageBackend};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let mut manager = CsvManager::new(MemoryStorageBackend::new(), &IngestConfig::default());
//!     let outcome = manager
//!         .upload("elenco.csv", "id,nome,idade\n1,Silva,19", DatasetType::Players)
//!         .await
//!         .unwrap();
//!     assert_eq!(outcome.records, 1);
//!     assert_eq!(manager.data().players[0].nome, "Silva");
//! });
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod import;
pub mod manager;
pub mod models;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
#[cfg(feature = "native-fs")]
pub use storage::FileSystemStorageBackend;
pub use storage::{MemoryStorageBackend, StorageBackend, StorageError};

pub use config::{ConfigError, IngestConfig};
pub use convert::{
    CoercionReport, CoercionWarning, Conversion, TypedRecords, convert_entry, convert_rows,
};
pub use import::{CSVImporter, Delimiter, HeaderKey, ImportError, ImportResult};
pub use manager::{CsvManager, ManagerError, UploadOutcome};
pub use store::{CsvFileStore, DataStore, PersistedStore, StoreRepository};
pub use validation::ValidationError;

// Re-export models
pub use models::enums::*;
pub use models::{
    Evaluation, GpsData, HistoryEntry, IngestionEntry, Injury, Player, RawRecord, Statistics,
};
