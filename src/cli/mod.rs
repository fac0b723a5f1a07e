//! Command line interface (`cli` feature)

pub mod commands;
pub mod error;

pub use error::CliError;

use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::IngestConfig;
use crate::manager::CsvManager;
use crate::storage::FileSystemStorageBackend;

/// Single-threaded runtime for one command
pub(crate) fn runtime() -> Result<Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError(format!("Failed to start runtime: {}", e)))
}

/// Load the workspace config and open its stores
pub(crate) async fn open_workspace(
    workspace: &Path,
) -> Result<CsvManager<FileSystemStorageBackend>, CliError> {
    if !workspace.is_dir() {
        return Err(CliError::FileNotFound(workspace.to_path_buf()));
    }
    let config = IngestConfig::load(workspace)?;
    let backend = FileSystemStorageBackend::new(config.store_root(workspace));
    Ok(CsvManager::open(backend, &config).await?)
}
