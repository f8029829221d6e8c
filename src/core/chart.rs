//! Bar chart data model: one labelled series plus sort and precision settings.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::core::{
    constants::DEFAULT_PRECISION, error::ChartError, parse::numeric_key, series::LabeledSeries,
};

/// How [`Chart::labels`] orders the bars.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortOption {
    /// Insertion order.
    #[default]
    None,
    /// Lexicographic by label.
    #[value(name = "label")]
    ByLabel,
    /// By the label read as a signed integer, or else by the integer formed
    /// from its digits (0 when it has none).
    #[value(name = "labelnum")]
    ByLabelNumeric,
    /// By value.
    #[value(name = "value")]
    ByValue,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// NaN first, then numeric order with -0 == +0.
fn compare_values(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[derive(Debug)]
pub struct Chart {
    data: LabeledSeries,
    sort: SortOption,
    direction: SortDirection,
    precision: u32,
    /// `10^precision`, cached for rounding.
    factor: f64,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(SortOption::None, SortDirection::Ascending, DEFAULT_PRECISION)
    }
}

impl Chart {
    #[must_use]
    pub fn new(sort: SortOption, direction: SortDirection, precision: u32) -> Self {
        let exp = i32::try_from(precision).unwrap_or(i32::MAX);
        Self {
            data: LabeledSeries::new(),
            sort,
            direction,
            precision,
            factor: 10_f64.powi(exp),
        }
    }

    #[inline]
    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    #[inline]
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Set the value for a label.
    pub fn set(&self, label: impl Into<String>, value: f64) -> &Self {
        self.data.set(label, value);
        self
    }

    /// Add to a label's value, registering the label if it is new.
    pub fn add(&self, label: impl Into<String>, delta: f64) -> &Self {
        self.data.add(label, delta);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn round(&self, value: f64) -> f64 {
        let scaled = value * self.factor;
        if scaled.is_finite() {
            scaled.round() / self.factor
        } else {
            // precision beyond what an f64 can hold: nothing to round
            value
        }
    }

    /// Labels ordered according to the sort configuration.
    ///
    /// Every sort is stable. `Descending` reverses the ascending result, so
    /// ties come out in reverse insertion order too.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels = match self.sort {
            SortOption::None => self.data.keys(),
            SortOption::ByLabel => {
                let mut labels = self.data.keys();
                labels.sort();
                labels
            }
            SortOption::ByLabelNumeric => {
                let mut labels = self.data.keys();
                labels.sort_by_key(|l| numeric_key(l));
                labels
            }
            SortOption::ByValue => {
                let mut entries = self.data.entries();
                entries.sort_by(|(_, a), (_, b)| compare_values(*a, *b));
                entries.into_iter().map(|(label, _)| label).collect()
            }
        };

        if self.direction == SortDirection::Descending {
            labels.reverse();
        }
        labels
    }

    /// The value for `label`, rounded to the configured precision.
    pub fn value(&self, label: &str) -> Result<f64, ChartError> {
        self.data
            .get(label)
            .map(|v| self.round(v))
            .ok_or_else(|| ChartError::UnknownLabel(label.to_owned()))
    }

    /// Highest value, rounded. Never below 0; an empty chart reports 0.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        let max = self.data.values().into_iter().fold(0.0, f64::max);
        self.round(max)
    }

    /// Longest label in characters; the first one wins on ties.
    #[must_use]
    pub fn max_label(&self) -> String {
        let mut longest = String::new();
        let mut longest_len = 0;
        for label in self.data.keys() {
            let len = label.chars().count();
            if len > longest_len {
                longest_len = len;
                longest = label;
            }
        }
        longest
    }
}
