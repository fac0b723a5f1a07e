//! Input validation utilities.
//!
//! Checks applied to user input before an upload reaches the import pipeline. The
//! pipeline itself does not look at file names or sizes.

use serde::Serialize;
use thiserror::Error;

use crate::models::DatasetType;

/// Required file name suffix (compared case-sensitively)
pub const CSV_EXTENSION: &str = ".csv";

/// Maximum length for uploaded file names
pub const MAX_FILE_NAME_LENGTH: usize = 255;

/// Maximum size for an uploaded CSV file (50MB)
pub const MAX_CSV_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur during input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),

    /// File exceeds the size limit
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate the name of an uploaded file.
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 255 characters
/// - Must end with `.csv` (lowercase; `.CSV` is rejected)
///
/// # Examples
///
/// ```
/// use fc_analytics_sdk::validation::input::validate_csv_file_name;
///
/// assert!(validate_csv_file_name("elenco.csv").is_ok());
/// assert!(validate_csv_file_name("elenco.CSV").is_err());
/// assert!(validate_csv_file_name("elenco.xlsx").is_err());
/// ```
pub fn validate_csv_file_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty("file name"));
    }

    if name.len() > MAX_FILE_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "file name",
            max: MAX_FILE_NAME_LENGTH,
            actual: name.len(),
        });
    }

    if !name.ends_with(CSV_EXTENSION) {
        return Err(ValidationError::InvalidFormat(
            "file name",
            format!("'{}' must end with {}", name, CSV_EXTENSION),
        ));
    }

    Ok(())
}

/// Validate an uploaded file's size.
pub fn validate_csv_file_size(size: u64) -> ValidationResult<()> {
    if size > MAX_CSV_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            size,
            max: MAX_CSV_FILE_SIZE,
        });
    }
    Ok(())
}

/// Parse a dataset type name (`players`, `injuries`, `evaluations`, `gps`, `statistics`).
///
/// # Examples
///
/// ```
/// use fc_analytics_sdk::models::DatasetType;
/// use fc_analytics_sdk::validation::input::parse_dataset_type;
///
/// assert_eq!(parse_dataset_type("gps").unwrap(), DatasetType::Gps);
/// assert!(parse_dataset_type("matches").is_err());
/// ```
pub fn parse_dataset_type(name: &str) -> ValidationResult<DatasetType> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty("dataset type"));
    }

    trimmed.parse().map_err(|_| {
        let expected: Vec<&str> = DatasetType::ALL.iter().map(|d| d.as_str()).collect();
        ValidationError::InvalidFormat(
            "dataset type",
            format!("unknown '{}', expected one of {}", trimmed, expected.join(", ")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_extension_is_case_sensitive() {
        assert!(validate_csv_file_name("lesoes 2024.csv").is_ok());
        assert!(matches!(
            validate_csv_file_name("lesoes.CSV"),
            Err(ValidationError::InvalidFormat("file name", _))
        ));
        assert!(validate_csv_file_name("csv").is_err());
    }

    #[test]
    fn test_file_name_limits() {
        assert_eq!(
            validate_csv_file_name(""),
            Err(ValidationError::Empty("file name"))
        );
        let long = format!("{}.csv", "a".repeat(300));
        assert!(matches!(
            validate_csv_file_name(&long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_file_size_limit() {
        assert!(validate_csv_file_size(1024).is_ok());
        assert!(validate_csv_file_size(MAX_CSV_FILE_SIZE + 1).is_err());
    }

    #[test]
    fn test_dataset_type_names() {
        assert_eq!(parse_dataset_type(" Players ").unwrap(), DatasetType::Players);
        let err = parse_dataset_type("jogos").unwrap_err();
        assert!(err.to_string().contains("players, injuries, evaluations, gps, statistics"));
        assert_eq!(
            parse_dataset_type("  "),
            Err(ValidationError::Empty("dataset type"))
        );
    }
}
