//! CLI command implementations

pub mod import;
pub mod remove;
pub mod status;
