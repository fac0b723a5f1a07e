//! Lenient numeric parsing
//!
//! Cells are read by their longest numeric prefix after leading whitespace, so
//! `"19 anos"` reads as 19 and `"12,5"` as 12. A cell without a numeric prefix yields
//! `None`; callers decide the default.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("Invalid regex"));
static RE_FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid regex")
});

/// Integer value of the leading digits of a cell. Out-of-range values saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let digits = RE_INT_PREFIX.find(raw.trim_start())?.as_str();
    match digits.parse() {
        Ok(value) => Some(value),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Float value of the leading decimal number of a cell
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let m = RE_FLOAT_PREFIX.find(raw.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}
