//! Delimiter detection

use std::fmt;

/// Field separator, chosen once per file from its header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// Candidates in detection order; earlier candidates win ties.
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
        }
    }

    /// Pick the candidate occurring most often in the header line.
    ///
    /// Only a strictly greater count replaces the current choice, so ties and a line
    /// without any candidate fall back to [`Delimiter::Comma`].
    pub fn detect(header_line: &str) -> Self {
        let mut selected = Delimiter::Comma;
        let mut max_count = 0;
        for candidate in Self::CANDIDATES {
            let count = header_line.matches(candidate.as_char()).count();
            if count > max_count {
                max_count = count;
                selected = candidate;
            }
        }
        selected
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => f.write_str("\\t"),
            other => write!(f, "{}", other.as_char()),
        }
    }
}
