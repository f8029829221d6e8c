//! Plain-text bar renderer for terminals and text files.
//!
//! ```text
//!  2021-Q1 ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇ 18.67
//!  2021-Q2 ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇ 37.1
//!  2021-Q3 ▏ 0.02
//! ```

use std::io::Write;

use tracing::debug;

use crate::{
    core::{
        chart::Chart,
        config::TerminalConfig,
        constants::{ROW_GUTTER, SMALL_TICK},
        error::RenderError,
    },
    render::{
        Render,
        format::{format_value, truncate},
    },
};

/// Per-render geometry derived from the chart.
struct Layout {
    max_value: f64,
    label_width: usize,
    bar_len: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer {
    config: TerminalConfig,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(config: TerminalConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    fn layout(&self, chart: &Chart) -> Layout {
        let max_value = chart.max_value();
        let label_width = chart
            .max_label()
            .chars()
            .count()
            .min(self.config.max_label_length);
        let value_width = format_value(max_value).chars().count();
        let bar_len = self
            .config
            .max_length
            .saturating_sub(label_width + value_width + ROW_GUTTER);
        Layout {
            max_value,
            label_width,
            bar_len,
        }
    }

    /// Number of ticks for `value`, within `0..=bar_len`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn bar_length(&self, value: f64, layout: &Layout) -> usize {
        let ratio = if self.config.scale {
            (value + 1.0).log10() / (layout.max_value + 1.0).log10()
        } else {
            value / layout.max_value
        };
        let len = (ratio * layout.bar_len as f64).round();
        if len.is_nan() || len <= 0.0 {
            return 0;
        }
        (len as usize).min(layout.bar_len)
    }

    fn bar(&self, value: f64, layout: &Layout) -> String {
        match self.bar_length(value, layout) {
            0 if self.config.uses_default_tick() => SMALL_TICK.to_string(),
            0 => String::new(),
            n => self.config.tick.to_string().repeat(n),
        }
    }

    fn row(&self, label: &str, value: f64, layout: &Layout) -> String {
        let label = truncate(label, self.config.max_label_length);
        let width = layout.label_width;
        format!(
            "{label:>width$} {} {}\n",
            self.bar(value, layout),
            format_value(value)
        )
    }
}

impl Render for TerminalRenderer {
    fn render<W: Write + ?Sized>(&self, chart: &Chart, out: &mut W) -> Result<usize, RenderError> {
        let layout = self.layout(chart);
        debug!(
            bars = chart.len(),
            max_value = layout.max_value,
            bar_len = layout.bar_len,
            "rendering terminal chart"
        );

        let mut written = 0;
        for label in chart.labels() {
            let value = chart.value(&label).map_err(|source| RenderError::Value {
                label: label.clone(),
                source,
            })?;
            let row = self.row(&label, value, &layout);
            out.write_all(row.as_bytes())?;
            written += row.len();
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DEFAULT_TICK;

    fn renderer(max_length: usize, tick: char) -> TerminalRenderer {
        TerminalRenderer::new(
            TerminalConfig::builder()
                .max_length(max_length)
                .tick(tick)
                .build()
                .unwrap(),
        )
    }

    fn render(r: &TerminalRenderer, chart: &Chart) -> String {
        let mut out = Vec::new();
        let n = r.render(chart, &mut out).unwrap();
        assert_eq!(n, out.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn layout_budget() {
        let chart = Chart::default();
        chart.set("A", 10.0).set("BB", 5.0);
        let layout = renderer(20, '#').layout(&chart);
        // 20 - 2 (label) - 2 ("10") - 2 (gutters)
        assert_eq!(layout.bar_len, 14);
        assert_eq!(layout.label_width, 2);
    }

    #[test]
    fn proportional_bars() {
        let chart = Chart::default();
        chart.set("A", 10.0).set("BB", 5.0);
        let out = render(&renderer(20, '#'), &chart);
        assert_eq!(out, " A ############## 10\nBB ####### 5\n");
    }

    #[test]
    fn small_tick_only_with_default_tick() {
        let chart = Chart::default();
        chart.set("big", 1000.0).set("tiny", 0.01);

        let out = render(&renderer(30, DEFAULT_TICK), &chart);
        assert!(out.ends_with(&format!("tiny {SMALL_TICK} 0.01\n")));

        let out = render(&renderer(30, '='), &chart);
        assert!(out.ends_with("tiny  0.01\n"));
    }

    #[test]
    fn logarithmic_scale() {
        let chart = Chart::default();
        chart.set("a", 999.0).set("b", 9.0);
        let r = TerminalRenderer::new(
            TerminalConfig::builder()
                .max_length(14)
                .scale(true)
                .tick('*')
                .build()
                .unwrap(),
        );
        // bar_len = 14 - 1 - 3 - 2 = 8; log10(10)/log10(1000) * 8 = 2.67 -> 3
        assert_eq!(render(&r, &chart), "a ******** 999\nb *** 9\n");
    }

    #[test]
    fn long_labels_are_truncated_and_aligned() {
        let chart = Chart::default();
        chart.set("a-very-long-label-indeed", 2.0).set("x", 1.0);
        let r = TerminalRenderer::new(
            TerminalConfig::builder()
                .max_length(30)
                .max_label_length(9)
                .tick('#')
                .build()
                .unwrap(),
        );
        let out = render(&r, &chart);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("a-v...eed ################## 2"));
        assert_eq!(lines.next(), Some("        x ######### 1"));
    }

    #[test]
    fn tiny_label_budget_keeps_columns_aligned() {
        let chart = Chart::default();
        chart.set("long", 1.0).set("x", 2.0);
        let r = TerminalRenderer::new(
            TerminalConfig::builder()
                .max_length(10)
                .max_label_length(2)
                .tick('#')
                .build()
                .unwrap(),
        );
        // bar_len = 10 - 2 - 1 - 2 = 5; 1/2 * 5 = 2.5 -> 3
        assert_eq!(render(&r, &chart), "lo ### 1\n x ##### 2\n");
    }

    #[test]
    fn narrow_chart_never_overflows() {
        let chart = Chart::default();
        chart.set("label", 12345.0);
        let out = render(&renderer(3, '#'), &chart);
        assert_eq!(out, "label  12345\n");
    }

    #[test]
    fn zero_values_do_not_divide_by_zero() {
        let chart = Chart::default();
        chart.set("z", 0.0);
        let out = render(&renderer(10, '#'), &chart);
        assert_eq!(out, "z  0\n");
    }
}
