//! Validation functionality
//!
//! Provides input validation for uploads: file names, file sizes and dataset type
//! names.

pub mod input;

pub use input::{
    ValidationError, ValidationResult, parse_dataset_type, validate_csv_file_name,
    validate_csv_file_size,
};
