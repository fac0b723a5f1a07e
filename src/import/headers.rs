//! Header normalization
//!
//! Raw header text such as `"Posição "` or `Diagnóstico/Queixa` becomes a machine-safe
//! key (`posicao`, `diagnostico_queixa`): surrounding quotes and spaces trimmed,
//! lowercased, accents removed, every run outside `[a-z0-9]` collapsed to one `_`, and
//! no leading or trailing `_`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use super::{ImportError, ImportResult};

static RE_NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));
static RE_UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").expect("Invalid regex"));

/// Combining Diacritical Marks block left behind by NFD decomposition
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// A normalized column key. Distinct raw headers may normalize to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderKey(String);

impl HeaderKey {
    /// Normalize raw header text into a key
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_header(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Headers made only of punctuation normalize to an empty key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HeaderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a single raw header. Idempotent.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c == '\'' || c == '"' || c.is_whitespace());
    let folded: String = trimmed
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();
    let slug = RE_NON_ALNUM_RUN.replace_all(&folded, "_");
    let slug = RE_UNDERSCORE_RUN.replace_all(&slug, "_");
    slug.trim_matches('_').to_string()
}

/// Normalize an ordered list of raw headers, preserving positions.
///
/// Empty keys stay in place so later columns keep their index.
///
/// # Errors
///
/// Returns [`ImportError::NoHeaders`] when the header line has no columns. Columns
/// whose key is empty are kept, so a blank header line still maps through the
/// positional fallback.
pub fn normalize_headers<S: AsRef<str>>(raw: &[S]) -> ImportResult<Vec<HeaderKey>> {
    if raw.is_empty() {
        return Err(ImportError::NoHeaders);
    }
    Ok(raw.iter().map(|h| HeaderKey::normalize(h.as_ref())).collect())
}
