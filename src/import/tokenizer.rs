//! Quote-aware line parsing

use super::delimiter::Delimiter;

/// Split one line into raw fields.
///
/// A `"` outside quotes opens a quoted section; inside quotes `""` yields a literal
/// quote and a lone `"` closes the section. The delimiter only separates fields outside
/// quotes. Fields are returned verbatim (no trimming); the count may differ from the
/// header count.
///
/// Quoted sections never span lines: the splitter runs first, so an embedded newline
/// ends the record.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                chars.next();
                current.push('"');
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delim && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    fields.push(current);
    fields
}
