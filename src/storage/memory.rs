//! In-memory storage backend
//!
//! Keeps files in a shared map. Clones share the same contents, so a host (or a test)
//! can keep a handle and inspect what a store persisted.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use super::{StorageBackend, StorageError, check_relative_path};

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

/// Storage backend backed by process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageBackend {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files
    pub fn file_count(&self) -> usize {
        self.state.read().map(|s| s.files.len()).unwrap_or(0)
    }
}

fn normalize(path: &str) -> String {
    path.trim_end_matches('/').to_string()
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::IoError("memory storage lock poisoned".to_string())
}

fn parent_dirs(path: &str) -> impl Iterator<Item = String> + '_ {
    path.match_indices('/').map(move |(idx, _)| path[..idx].to_string())
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        check_relative_path(path)?;
        let state = self.state.read().map_err(poisoned)?;
        state
            .files
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        check_relative_path(path)?;
        let path = normalize(path);
        let mut state = self.state.write().map_err(poisoned)?;
        for dir in parent_dirs(&path) {
            state.dirs.insert(dir);
        }
        state.files.insert(path, content.to_vec());
        Ok(())
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        check_relative_path(path)?;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.files.contains_key(&normalize(path)))
    }

    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        check_relative_path(path)?;
        let path = normalize(path);
        if path.is_empty() {
            return Ok(true);
        }
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.dirs.contains(&path))
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        check_relative_path(path)?;
        let path = normalize(path);
        let mut state = self.state.write().map_err(poisoned)?;
        for dir in parent_dirs(&path) {
            state.dirs.insert(dir);
        }
        if !path.is_empty() {
            state.dirs.insert(path);
        }
        Ok(())
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        check_relative_path(dir)?;
        let dir = normalize(dir);
        let state = self.state.read().map_err(poisoned)?;
        if !dir.is_empty() && !state.dirs.contains(&dir) {
            return Err(StorageError::NotFound(dir));
        }
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };
        Ok(state
            .files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/'))
            .map(str::to_string)
            .collect())
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        check_relative_path(path)?;
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .files
            .remove(&normalize(path))
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}
