//! Chart.js bar chart configuration output.
//!
//! The result is a JavaScript snippet assigning the configuration object to
//! `config`, ready to pass to `new Chart(ctx, config)`.

use std::{fmt::Write as _, io::Write};

use crate::{
    core::{chart::Chart, error::RenderError},
    render::{
        Render, collect_rows,
        format::{format_value, quote},
    },
};

const HEADER: &str = "// Chart.js bar chart configuration.\n\
                      // See: https://www.chartjs.org/docs/latest/charts/bar.html\n";

#[derive(Debug, Clone, Default)]
pub struct ChartJsRenderer {
    title: Option<String>,
}

impl ChartJsRenderer {
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

impl Render for ChartJsRenderer {
    fn render<W: Write + ?Sized>(&self, chart: &Chart, out: &mut W) -> Result<usize, RenderError> {
        let rows = collect_rows(chart)?;

        let labels: Vec<String> = rows.iter().map(|(l, _)| quote(l)).collect();
        let values: Vec<String> = rows.iter().map(|(_, v)| format_value(*v)).collect();

        let mut buf = String::from(HEADER);
        // writing into a String cannot fail
        let _ = write!(
            buf,
            "const config = {{\n  \
               type: 'bar',\n  \
               data: {{\n    \
                 labels: [{}],\n    \
                 datasets: [{{\n      \
                   data: [{}],\n    \
                 }}],\n  \
               }},\n  \
               options: {{\n    \
                 plugins: {{\n      \
                   legend: {{\n        \
                     display: false,\n      \
                   }},\n",
            labels.join(", "),
            values.join(", "),
        );
        if let Some(title) = &self.title {
            let _ = write!(
                buf,
                "      title: {{\n        \
                   display: true,\n        \
                   text: {},\n      \
                 }},\n",
                quote(title),
            );
        }
        buf.push_str("    },\n  },\n};\n");

        out.write_all(buf.as_bytes())?;
        Ok(buf.len())
    }
}
