//! Coercion reporting
//!
//! Unparsable numeric cells never fail an upload; they fall back to the field's
//! documented default. Each such fallback is recorded here so callers can surface a
//! data-quality count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty cell that could not be parsed and was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionWarning {
    /// 1-based data row (the header line is not counted)
    pub row: usize,
    /// Record field that received the default
    pub field: String,
    /// Cell text as read from the file
    pub value: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: {} = {:?} is not a number, using default",
            self.row, self.field, self.value
        )
    }
}

/// Warnings collected while converting one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionReport {
    #[serde(default)]
    pub warnings: Vec<CoercionWarning>,
}

impl CoercionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: usize, field: &str, value: &str) {
        self.warnings.push(CoercionWarning {
            row,
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings for one field, in row order
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a CoercionWarning> {
        self.warnings.iter().filter(move |w| w.field == field)
    }
}
