//! CLI-specific error types

use crate::config::ConfigError;
use crate::import::ImportError;
use crate::manager::ManagerError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("{0}")]
    ManagerError(#[from] ManagerError),

    #[error("Failed to serialize output: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}
