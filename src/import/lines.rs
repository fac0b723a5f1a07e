//! Line splitting

use super::{ImportError, ImportResult};

/// Byte-order mark some spreadsheet exports prepend to the first line
pub const BOM: char = '\u{feff}';

/// A single non-blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub text: &'a str,
}

/// Split file text on `\r?\n`, keeping only lines with non-whitespace content.
///
/// The byte-order mark is removed from the first retained line only.
///
/// # Errors
///
/// Returns [`ImportError::EmptyFile`] when no line survives.
pub fn split_lines(text: &str) -> ImportResult<Vec<RawLine<'_>>> {
    let mut lines: Vec<RawLine<'_>> = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| RawLine {
            number: idx + 1,
            text: line.strip_suffix('\r').unwrap_or(line),
        })
        .filter(|line| !is_blank(line.text))
        .collect();

    match lines.first_mut() {
        Some(first) => {
            first.text = first.text.strip_prefix(BOM).unwrap_or(first.text);
            Ok(lines)
        }
        None => Err(ImportError::EmptyFile),
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == BOM)
}
