//! Output formats. Every renderer reads the same sorted `(label, value)`
//! sequence from a [`Chart`] and differs only in presentation.

pub mod chartjs;
pub mod format;
pub mod mermaid;
pub mod terminal;

use std::io::Write;

pub use chartjs::ChartJsRenderer;
pub use mermaid::MermaidRenderer;
pub use terminal::TerminalRenderer;

use crate::core::{chart::Chart, error::RenderError};

pub trait Render {
    /// Write `chart` to `out`, returning the number of bytes written.
    /// The chart is only read.
    fn render<W: Write + ?Sized>(&self, chart: &Chart, out: &mut W) -> Result<usize, RenderError>;
}

/// Sorted labels paired with their rounded values.
pub(crate) fn collect_rows(chart: &Chart) -> Result<Vec<(String, f64)>, RenderError> {
    chart
        .labels()
        .into_iter()
        .map(|label| match chart.value(&label) {
            Ok(value) => Ok((label, value)),
            Err(source) => Err(RenderError::Value { label, source }),
        })
        .collect()
}

/// The closed set of output formats.
#[derive(Debug, Clone)]
pub enum Renderer {
    Terminal(TerminalRenderer),
    Mermaid(MermaidRenderer),
    ChartJs(ChartJsRenderer),
}

impl Renderer {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terminal(_) => "terminal",
            Self::Mermaid(_) => "mermaid",
            Self::ChartJs(_) => "chartjs",
        }
    }
}

impl Render for Renderer {
    fn render<W: Write + ?Sized>(&self, chart: &Chart, out: &mut W) -> Result<usize, RenderError> {
        match self {
            Self::Terminal(r) => r.render(chart, out),
            Self::Mermaid(r) => r.render(chart, out),
            Self::ChartJs(r) => r.render(chart, out),
        }
    }
}

impl From<TerminalRenderer> for Renderer {
    fn from(r: TerminalRenderer) -> Self {
        Self::Terminal(r)
    }
}
impl From<MermaidRenderer> for Renderer {
    fn from(r: MermaidRenderer) -> Self {
        Self::Mermaid(r)
    }
}
impl From<ChartJsRenderer> for Renderer {
    fn from(r: ChartJsRenderer) -> Self {
        Self::ChartJs(r)
    }
}
