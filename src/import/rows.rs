//! Row mapping
//!
//! Zips the normalized header keys with the fields of one data line into a
//! [`RawRecord`]. Missing trailing fields read as `""`, extra trailing fields are not
//! keyed. Cells equal to a null sentinel (verbatim, no trimming) become `None`.
//!
//! Some injury exports carry the mechanism and secondary location in fixed columns
//! whose header text is blank or inconsistent. When a row is wide enough, those two
//! columns are copied under [`MECANISMO_DIRETO`] and [`LOCAL2_DIRETO`] independently of
//! the header keys; record construction prefers the header-keyed value and only falls
//! back to these.

use crate::models::{AgeBracket, RawRecord};

use super::headers::HeaderKey;
use super::numeric::parse_leading_int;

/// Cell values that mean "no data"
pub const DEFAULT_NULL_SENTINELS: [&str; 4] = ["", "NA", "N/A", "-"];

/// Key holding the positional copy of the injury mechanism column
pub const MECANISMO_DIRETO: &str = "mecanismo_direto";
/// Key holding the positional copy of the secondary location column
pub const LOCAL2_DIRETO: &str = "local2_direto";

/// 0-based column of the injury mechanism in the standard export layout
pub const MECANISMO_COLUMN: usize = 17;
/// 0-based column of the secondary injury location in the standard export layout
pub const LOCAL2_COLUMN: usize = 18;

/// Raw age field
pub const IDADE: &str = "idade";
/// Derived age bracket field
pub const IDADE_PADRONIZADA: &str = "idade_padronizada";

/// Fixed columns copied regardless of header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalFallback {
    pub mecanismo_column: usize,
    pub local2_column: usize,
}

impl PositionalFallback {
    /// A row needs at least this many fields for the fallback to apply
    pub fn min_fields(&self) -> usize {
        self.mecanismo_column.max(self.local2_column) + 1
    }

    fn apply(&self, fields: &[String], record: &mut RawRecord) {
        if fields.len() < self.min_fields() {
            return;
        }
        record.insert(MECANISMO_DIRETO, non_empty(&fields[self.mecanismo_column]));
        record.insert(LOCAL2_DIRETO, non_empty(&fields[self.local2_column]));
    }
}

impl Default for PositionalFallback {
    fn default() -> Self {
        Self {
            mecanismo_column: MECANISMO_COLUMN,
            local2_column: LOCAL2_COLUMN,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Maps data lines onto the canonical header key sequence of one file.
#[derive(Debug, Clone)]
pub struct RowMapper {
    headers: Vec<HeaderKey>,
    null_sentinels: Vec<String>,
    positional: Option<PositionalFallback>,
}

impl RowMapper {
    /// Mapper with the default sentinels and positional fallback enabled
    pub fn new(headers: Vec<HeaderKey>) -> Self {
        Self {
            headers,
            null_sentinels: DEFAULT_NULL_SENTINELS.iter().map(|s| s.to_string()).collect(),
            positional: Some(PositionalFallback::default()),
        }
    }

    /// Replace the null sentinel set
    pub fn with_null_sentinels(mut self, sentinels: Vec<String>) -> Self {
        self.null_sentinels = sentinels;
        self
    }

    /// Set or disable the positional fallback
    pub fn with_positional_fallback(mut self, positional: Option<PositionalFallback>) -> Self {
        self.positional = positional;
        self
    }

    pub fn headers(&self) -> &[HeaderKey] {
        &self.headers
    }

    /// Whether a cell is a null sentinel. Comparison is verbatim.
    pub fn is_null(&self, value: &str) -> bool {
        self.null_sentinels.iter().any(|s| s == value)
    }

    /// Map one line's fields and compute derived fields.
    pub fn map_row(&self, fields: &[String]) -> RawRecord {
        let mut record = self.map_fields(fields);
        derive_fields(&mut record);
        record
    }

    /// Keyed mapping plus positional fallback, without derived fields.
    pub fn map_fields(&self, fields: &[String]) -> RawRecord {
        let mut record = RawRecord::new();
        for (idx, key) in self.headers.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let value = fields.get(idx).map(String::as_str).unwrap_or("");
            let value = (!self.is_null(value)).then(|| value.to_string());
            record.insert(key.as_str(), value);
        }
        if let Some(positional) = &self.positional {
            positional.apply(fields, &mut record);
        }
        record
    }
}

/// Add computed fields: the standardized age bracket when `idade` is present and the
/// bracket is not already supplied. Idempotent.
pub fn derive_fields(record: &mut RawRecord) {
    if record.contains_key(IDADE) && !record.contains_key(IDADE_PADRONIZADA) {
        let bracket = age_bracket(record.get(IDADE));
        record.insert(IDADE_PADRONIZADA, Some(bracket.label().to_string()));
    }
}

/// Bracket for a raw age cell; missing or unparsable ages are not informed.
pub fn age_bracket(raw: Option<&str>) -> AgeBracket {
    AgeBracket::from_age(raw.and_then(parse_leading_int))
}
