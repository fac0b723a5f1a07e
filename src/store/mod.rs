//! Persisted state containers
//!
//! Two independent stores, constructed explicitly and handed to the
//! [`CsvManager`](crate::manager::CsvManager):
//!
//! - [`CsvFileStore`]: the live [`IngestionEntry`](crate::models::IngestionEntry) per dataset
//! - [`DataStore`]: the typed record arrays derived from those entries

pub mod csv_files;
pub mod data;
pub mod repository;

pub use csv_files::CsvFileStore;
pub use data::{DataStore, parse_record_date};
pub use repository::{PersistedStore, StoreRepository};
