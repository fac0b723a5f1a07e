//! Import functionality
//!
//! Turns the text of an uploaded CSV file into an [`IngestionEntry`]. The pipeline runs
//! in fixed stages, each a pure function of its input plus configuration:
//!
//! 1. [`lines`] - split into non-blank logical lines, strip the byte-order mark
//! 2. [`delimiter`] - pick the separator from the header line
//! 3. [`tokenizer`] - quote-aware field splitting of one line
//! 4. [`headers`] - normalize raw header text into [`HeaderKey`]s
//! 5. [`rows`] - map fields to keys, coerce null sentinels, positional fallback, age bracket
//! 6. [`csv`] - assemble the entry with provenance
//!
//! [`IngestionEntry`]: crate::models::IngestionEntry

pub mod csv;
pub mod delimiter;
pub mod headers;
pub mod lines;
pub mod numeric;
pub mod rows;
pub mod tokenizer;

pub use csv::CSVImporter;
pub use delimiter::Delimiter;
pub use headers::HeaderKey;
pub use rows::{PositionalFallback, RowMapper};

/// Error during import
///
/// Every variant aborts the upload; nothing is persisted for a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    #[error("CSV file is empty")]
    EmptyFile,
    #[error("Could not identify any headers in the CSV file")]
    NoHeaders,
    #[error("No valid data rows found in the CSV file")]
    NoDataRows,
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
