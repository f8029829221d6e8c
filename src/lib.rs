//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use barchart::{Chart, MermaidRenderer, Render, parse_line};
//!
//! let chart = Chart::default();
//! for line in ["1 One", "2 Two"] {
//!     let (value, label) = parse_line(line).unwrap();
//!     chart.set(label, value);
//! }
//!
//! let mut out = Vec::new();
//! MermaidRenderer::new().render(&chart, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("  bar [1, 2]\n"));
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    chart::{Chart, SortDirection, SortOption},
    config::{TerminalConfig, TerminalConfigBuilder},
    constants::{DEFAULT_PRECISION, DEFAULT_TICK, SMALL_TICK},
    error::{ChartError, ConfigError, Error, ParseError, RenderError},
    parse::parse_line,
    series::LabeledSeries,
};

pub use render::{ChartJsRenderer, MermaidRenderer, Render, Renderer, TerminalRenderer};

/// Convenience function: aggregate `lines` into a chart with default
/// settings and render it with `renderer` into a `String`.
///
/// Unparsable lines are skipped, as on the command line.
pub fn render_lines<'a, I>(lines: I, renderer: &Renderer) -> Result<String, RenderError>
where
    I: IntoIterator<Item = &'a str>,
{
    let chart = Chart::default();
    for line in lines {
        if let Ok((value, label)) = parse_line(line.trim()) {
            chart.set(label, value);
        }
    }

    let mut out = Vec::new();
    renderer.render(&chart, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
