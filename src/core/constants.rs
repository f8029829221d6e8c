//! A collection of constants.

/// Character used to draw terminal bars unless the user picks another one.
pub const DEFAULT_TICK: char = '▇';
/// Drawn in place of an empty bar so tiny non-zero values stay visible.
pub const SMALL_TICK: char = '▏';

/// Total width of a terminal chart row.
pub const DEFAULT_MAX_LENGTH: usize = 80;
/// Labels longer than this are truncated in the middle.
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 20;
/// Width used when the terminal size cannot be queried.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Values are rounded to two decimal places.
///
/// 14.832 becomes 14.83
pub const DEFAULT_PRECISION: u32 = 2;

/// One space between label and bar, one between bar and value.
pub const ROW_GUTTER: usize = 2;

/// Replaces the middle of a truncated label.
pub const ELLIPSIS: &str = "...";
