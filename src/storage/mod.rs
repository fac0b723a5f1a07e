//! Storage backend abstraction
//!
//! The persisted stores are read and written through a [`StorageBackend`], so the same
//! store code runs against the local filesystem or an in-memory map. Paths are
//! `/`-separated and relative to the backend root.

use async_trait::async_trait;

#[cfg(feature = "native-fs")]
pub mod filesystem;
pub mod memory;

#[cfg(feature = "native-fs")]
pub use filesystem::FileSystemStorageBackend;
pub use memory::MemoryStorageBackend;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// File or directory not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying IO failure
    #[error("IO error: {0}")]
    IoError(String),

    /// Persisted content could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Persisted state was written by a newer schema than this crate understands
    #[error("Unsupported version {found} for {store} (supported up to {supported})")]
    UnsupportedVersion {
        store: String,
        found: u32,
        supported: u32,
    },

    /// Path escapes the backend root or is otherwise unusable
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Storage backend for persisted state
///
/// All operations are async so a host can plug in non-blocking storage.
#[async_trait(?Send)]
pub trait StorageBackend {
    /// Read the full content of a file
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Create or overwrite a file. Parent directories are created as needed.
    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError>;

    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Create a directory and any missing parents
    async fn create_dir(&self, path: &str) -> Result<(), StorageError>;

    /// Names (not paths) of the files directly inside a directory, sorted
    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError>;

    async fn delete_file(&self, path: &str) -> Result<(), StorageError>;
}

/// Reject absolute paths and parent-directory components
pub(crate) fn check_relative_path(path: &str) -> Result<(), StorageError> {
    if path.starts_with('/') || path.split('/').any(|part| part == "..") {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(())
}
