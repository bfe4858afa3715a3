//! Dual-series chart data.
//!
//! A [`ChartSeriesBundle`] holds the category labels and the two numeric
//! series (bar and line) for one dashboard chart. The bundle can only be
//! built through [`ChartSeriesBundle::new`], which rejects series whose
//! length does not match the category count, so the renderer never sees
//! misaligned arrays.

use crate::serde_util::null_default;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartDataError {
    #[error("{series} series has {actual} points but there are {expected} categories")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Categories plus a bar and a line series of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeriesBundle {
    categories: Vec<String>,
    bar: Vec<f64>,
    line: Vec<f64>,
    /// Series names: `[bar, line]`.
    names: [String; 2],
    legend: Vec<String>,
}

impl ChartSeriesBundle {
    pub fn new(
        categories: Vec<String>,
        bar: Vec<f64>,
        line: Vec<f64>,
        names: [String; 2],
    ) -> Result<Self, ChartDataError> {
        let expected = categories.len();
        if bar.len() != expected {
            return Err(ChartDataError::LengthMismatch {
                series: "bar",
                expected,
                actual: bar.len(),
            });
        }
        if line.len() != expected {
            return Err(ChartDataError::LengthMismatch {
                series: "line",
                expected,
                actual: line.len(),
            });
        }
        Ok(Self {
            categories,
            bar,
            line,
            names,
            legend: Vec::new(),
        })
    }

    /// A bundle with no points, used before the first fetch resolves.
    pub fn empty(names: [String; 2]) -> Self {
        Self {
            names,
            ..Default::default()
        }
    }

    pub fn with_legend(mut self, legend: Vec<String>) -> Self {
        self.legend = legend;
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn bar(&self) -> &[f64] {
        &self.bar
    }

    pub fn line(&self) -> &[f64] {
        &self.line
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Which payload array feeds a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesSource {
    /// `fdDate`
    Primary,
    /// `fdDate2`
    Secondary,
}

/// `data` of a metrics endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetricsPayload {
    #[serde(rename = "fdLegend", default, deserialize_with = "null_default")]
    pub legend: Vec<String>,
    #[serde(rename = "fdType", default, deserialize_with = "null_default")]
    pub categories: Vec<String>,
    #[serde(rename = "fdDate", default, deserialize_with = "null_default")]
    pub primary: Vec<f64>,
    #[serde(rename = "fdDate2", default, deserialize_with = "null_default")]
    pub secondary: Vec<f64>,
}

impl MetricsPayload {
    /// Map the payload arrays onto the bar and line series.
    pub fn into_bundle(
        self,
        bar: SeriesSource,
        line: SeriesSource,
        names: [String; 2],
    ) -> Result<ChartSeriesBundle, ChartDataError> {
        let pick = |source: SeriesSource| match source {
            SeriesSource::Primary => self.primary.clone(),
            SeriesSource::Secondary => self.secondary.clone(),
        };
        let bar_values = pick(bar);
        let line_values = pick(line);
        Ok(ChartSeriesBundle::new(self.categories, bar_values, line_values, names)?
            .with_legend(self.legend))
    }
}
