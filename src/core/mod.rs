//! Aggregates the “business logic” layer.

pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod parse;
pub mod series;
pub mod terminal;

// re-export frequently-used items for convenience
pub use chart::{Chart, SortDirection, SortOption};
pub use config::{TerminalConfig, TerminalConfigBuilder};
pub use constants::{
    DEFAULT_MAX_LABEL_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_PRECISION, DEFAULT_TICK, SMALL_TICK,
};
pub use error::{ChartError, ConfigError, Error, ParseError, RenderError};
pub use parse::{numeric_key, parse_line};
pub use series::LabeledSeries;
