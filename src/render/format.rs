//! Text helpers shared by the renderers.

use crate::core::constants::ELLIPSIS;

/// Shortest representation that round-trips: `10`, `0.5`, `1234.56`.
#[inline]
#[must_use]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Shorten `label` to `max_len` characters by replacing its middle with `...`.
///
/// Both kept halves are `(max_len - 3) / 2` characters long, so an odd
/// budget yields a result one character shorter than `max_len`. Budgets
/// too small for the ellipsis keep the first `max_len` characters.
#[must_use]
pub fn truncate(label: &str, max_len: usize) -> String {
    let len = label.chars().count();
    if len <= max_len {
        return label.to_owned();
    }
    if max_len < ELLIPSIS.len() {
        return label.chars().take(max_len).collect();
    }

    let part = max_len.saturating_sub(ELLIPSIS.len()) / 2;
    let front: String = label.chars().take(part).collect();
    let back: String = label.chars().skip(len - part).collect();
    format!("{front}{ELLIPSIS}{back}")
}

/// Double-quoted, JSON-escaped string literal.
#[inline]
#[must_use]
pub fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
