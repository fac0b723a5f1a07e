//! Store persistence
//!
//! Each store is saved as one JSON document `{"state": ..., "version": N}` named after
//! the store (`csv-files-store.json`, `football-data-store.json`). A missing document
//! loads as an empty store.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::storage::{StorageBackend, StorageError};

/// A store that can be persisted through a [`StoreRepository`]
pub trait PersistedStore: Serialize + DeserializeOwned + Default {
    /// Document name, without extension
    const NAME: &'static str;
    /// Schema version written by this crate
    const VERSION: u32;

    /// Upgrade a persisted state written by an older version.
    ///
    /// No schema change has happened yet, so the state passes through unchanged.
    fn migrate(state: Value, from_version: u32) -> Result<Value, StorageError> {
        debug!(
            "Migrating {} state from version {} to {}",
            Self::NAME,
            from_version,
            Self::VERSION
        );
        Ok(state)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: Value,
    #[serde(default)]
    version: u32,
}

/// Loads and saves stores through a storage backend
pub struct StoreRepository<B: StorageBackend> {
    storage: B,
    /// Directory prefix inside the backend; empty for the backend root
    prefix: String,
}

impl<B: StorageBackend> StoreRepository<B> {
    /// Repository writing at the backend root
    pub fn new(storage: B) -> Self {
        Self {
            storage,
            prefix: String::new(),
        }
    }

    /// Repository writing below `prefix` inside the backend
    pub fn with_prefix(storage: B, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Backend path of a store's document
    pub fn path_for<S: PersistedStore>(&self) -> String {
        if self.prefix.is_empty() {
            format!("{}.json", S::NAME)
        } else {
            format!("{}/{}.json", self.prefix, S::NAME)
        }
    }

    /// Load a store, or its default when nothing was persisted yet
    pub async fn load<S: PersistedStore>(&self) -> Result<S, StorageError> {
        let path = self.path_for::<S>();
        if !self.storage.file_exists(&path).await? {
            debug!("No persisted {} at {}, starting empty", S::NAME, path);
            return Ok(S::default());
        }

        let content = self.storage.read_file(&path).await?;
        let envelope: Envelope = serde_json::from_slice(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse {}: {}", path, e))
        })?;

        let state = match envelope.version {
            v if v > S::VERSION => {
                return Err(StorageError::UnsupportedVersion {
                    store: S::NAME.to_string(),
                    found: v,
                    supported: S::VERSION,
                });
            }
            v if v < S::VERSION => S::migrate(envelope.state, v)?,
            _ => envelope.state,
        };

        let store = serde_json::from_value(state).map_err(|e| {
            StorageError::SerializationError(format!("Invalid {} state: {}", S::NAME, e))
        })?;
        info!("Loaded {} from {}", S::NAME, path);
        Ok(store)
    }

    /// Persist a store at its current version
    pub async fn save<S: PersistedStore>(&self, store: &S) -> Result<(), StorageError> {
        let path = self.path_for::<S>();
        let content = serde_json::to_vec_pretty(&EnvelopeRef {
            state: store,
            version: S::VERSION,
        })
        .map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize {}: {}", S::NAME, e))
        })?;

        self.storage.write_file(&path, &content).await?;
        debug!("Saved {} to {}", S::NAME, path);
        Ok(())
    }
}
