//! Loose `<value><sep><label>` line parser with zero-copy float parsing.
//!
//! Accepts whatever usually comes out of `uniq -c`, `wc -l`, spreadsheets and
//! friends: `42 apples`, `$1,234.56 Revenue`, `18.67,2021-Q1`, `7|CWE-79`.

use crate::core::error::ParseError;

/// Any of these may end the value region.
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b',' | b';' | b':' | b'|' | b'#')
}

/// A comma between a digit and exactly three more digits groups thousands
/// (`1,234.56`) rather than separating the value from its label.
fn is_digit_group(line: &[u8], i: usize) -> bool {
    line[i] == b','
        && i > 0
        && line[i - 1].is_ascii_digit()
        && line.len() > i + 4
        && line[i + 1..i + 4].iter().all(u8::is_ascii_digit)
        && !line[i + 4].is_ascii_digit()
}

/// Position of the separator that ends the value region.
///
/// Digit-grouping commas are skipped, unless skipping them leaves no
/// separator at all; then the plain first separator is used.
fn find_separator(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let first = bytes.iter().position(|&b| is_separator(b))?;
    let split = (first..bytes.len())
        .find(|&i| is_separator(bytes[i]) && !is_digit_group(bytes, i))
        .unwrap_or(first);
    Some(split)
}

/// Keep only digits and dots, then drop a single trailing dot.
fn numeric_bytes(region: &str) -> Vec<u8> {
    let mut buf: Vec<u8> = region
        .bytes()
        .filter(|b| b.is_ascii_digit() || *b == b'.')
        .collect();
    if buf.ends_with(b".") {
        buf.pop();
    }
    buf
}

/// Split one data line into its value and label.
///
/// Everything before the first separator is the value region (commas that
/// group thousands do not count as separators); currency
/// symbols, thousands separators and other punctuation are stripped from it
/// before parsing. Everything after the separator, trimmed, is the label.
pub fn parse_line(line: &str) -> Result<(f64, String), ParseError> {
    let sep = find_separator(line).ok_or(ParseError::NoSeparator)?;

    // separators are single-byte ASCII, so both slices sit on char boundaries
    let label = line[sep + 1..].trim();
    if label.is_empty() {
        return Err(ParseError::EmptyLabel);
    }

    let digits = numeric_bytes(&line[..sep]);
    if digits.is_empty() {
        return Err(ParseError::EmptyValue);
    }

    let value = lexical_core::parse::<f64>(&digits).map_err(|_| ParseError::InvalidNumber {
        text: String::from_utf8_lossy(&digits).into_owned(),
    })?;

    Ok((value, label.to_owned()))
}

/// Integer sort key for a label.
///
/// A label that is itself an integer sorts by that integer; otherwise all
/// of its digits are concatenated (`2021-Q3` → 20213). Labels without
/// digits, or whose digits overflow an `i64`, sort as 0.
#[must_use]
pub fn numeric_key(label: &str) -> i64 {
    if let Ok(n) = lexical_core::parse::<i64>(label.as_bytes()) {
        return n;
    }
    let digits: Vec<u8> = label.bytes().filter(u8::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    lexical_core::parse::<i64>(&digits).unwrap_or(0)
}
