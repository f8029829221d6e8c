//! Mermaid XY chart output.
//!
//! See: <https://mermaid.js.org/syntax/xyChart.html>

use std::io::Write;

use crate::{
    core::{chart::Chart, error::RenderError},
    render::{Render, collect_rows, format::format_value},
};

#[derive(Debug, Clone, Default)]
pub struct MermaidRenderer {
    title: Option<String>,
}

impl MermaidRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty title is the same as no title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }
}

impl Render for MermaidRenderer {
    fn render<W: Write + ?Sized>(&self, chart: &Chart, out: &mut W) -> Result<usize, RenderError> {
        let rows = collect_rows(chart)?;

        let labels: Vec<String> = rows.iter().map(|(l, _)| format!("\"{l}\"")).collect();
        let values: Vec<String> = rows.iter().map(|(_, v)| format_value(*v)).collect();

        let mut buf = String::from("xychart-beta\n");
        if let Some(title) = &self.title {
            buf.push_str(&format!("  title \"{title}\"\n"));
        }
        buf.push_str(&format!("  x-axis [{}]\n", labels.join(", ")));
        buf.push_str(&format!("  bar [{}]\n", values.join(", ")));

        out.write_all(buf.as_bytes())?;
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_output_with_title() {
        let chart = Chart::default();
        chart.set("One", 1.0).set("Two", 2.0);

        let mut out = Vec::new();
        let n = MermaidRenderer::new()
            .title("T")
            .render(&chart, &mut out)
            .unwrap();

        let expected = "xychart-beta\n  title \"T\"\n  x-axis [\"One\", \"Two\"]\n  bar [1, 2]\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(n, expected.len());
    }

    #[test]
    fn title_line_is_optional() {
        let chart = Chart::default();
        chart.set("A", 0.5);

        let mut out = Vec::new();
        MermaidRenderer::new()
            .title("")
            .render(&chart, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "xychart-beta\n  x-axis [\"A\"]\n  bar [0.5]\n"
        );
    }
}
