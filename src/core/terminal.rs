//! Terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::FALLBACK_TERMINAL_WIDTH;

/// Current terminal width in columns (80 fallback when not a tty).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .filter(|&w| w > 0)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// Maximum chart row length: the terminal width when `fit` is set,
/// otherwise the requested length.
#[inline]
#[must_use]
pub fn row_length(requested: usize, fit: bool) -> usize {
    if fit { terminal_width() } else { requested }
}
