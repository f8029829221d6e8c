//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Why a data line could not be turned into a `(value, label)` pair.
///
/// Every variant is recoverable: callers skip the line and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing data separator")]
    NoSeparator,
    #[error("missing label")]
    EmptyLabel,
    #[error("missing value")]
    EmptyValue,
    #[error("parsing {text:?} as a number")]
    InvalidNumber { text: String },
}

/// Faults raised by chart queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown label {0:?}")]
    UnknownLabel(String),
}

/// Precise configuration faults, raised when a renderer is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
}

/// Failures while writing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("getting value for {label:?} label: {source}")]
    Value {
        label: String,
        #[source]
        source: ChartError,
    },
    #[error("writing to output: {0}")]
    Io(#[from] io::Error),
}

/// Top-level error type bubbled up to the command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("opening input: {0}")]
    OpenInput(#[source] io::Error),
    #[error("reading input: {0}")]
    ReadInput(#[source] io::Error),
    #[error("opening output: {0}")]
    OpenOutput(#[source] io::Error),
    #[error("creating renderer: {0}")]
    Config(#[from] ConfigError),
    #[error("rendering chart: {0}")]
    Render(#[from] RenderError),
}
