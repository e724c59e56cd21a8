//! Chart Specification Module
//! Typed input tables for the bar-chart renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("series '{series}' has {got} values but the chart has {expected} categories")]
    Input {
        series: String,
        got: usize,
        expected: usize,
    },
    #[error("chart drawing failed: {0}")]
    Render(String),
    #[error("failed to write chart image: {0}")]
    Io(#[from] image::ImageError),
}

/// One labeled group on the category axis, optionally annotated with a
/// sample-size count shown in the tick label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub sample_size: Option<u32>,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sample_size: None,
        }
    }

    pub fn with_samples(label: impl Into<String>, sample_size: u32) -> Self {
        Self {
            label: label.into(),
            sample_size: Some(sample_size),
        }
    }

    /// Axis tick text, e.g. "Optics (97)".
    pub fn display_label(&self) -> String {
        match self.sample_size {
            Some(n) => format!("{} ({})", self.label, n),
            None => self.label.clone(),
        }
    }
}

/// One measured condition across all categories. `None` marks a missing
/// measurement and renders as no bar at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Series with every value present.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: name.into(),
            values: values.iter().copied().map(Some).collect(),
        }
    }
}

/// How bar values are rendered as text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// "49.5%"
    Percent,
    /// "+4.2%" / "-3.7%", for delta charts
    SignedPercent,
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Percent
    }
}

impl ValueFormat {
    pub fn label(&self, value: f64) -> String {
        match self {
            ValueFormat::Percent => format!("{:.1}%", value),
            ValueFormat::SignedPercent => format!("{:+.1}%", value),
        }
    }
}

/// Complete input for one grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub categories: Vec<Category>,
    pub series: Vec<Series>,
    pub value_format: ValueFormat,
}

impl BarChartSpec {
    /// Every series must carry exactly one value slot per category.
    pub fn validate(&self) -> Result<(), ChartError> {
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(ChartError::Input {
                    series: series.name.clone(),
                    got: series.values.len(),
                    expected: self.categories.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_includes_sample_size() {
        assert_eq!(Category::with_samples("Optics", 97).display_label(), "Optics (97)");
        assert_eq!(Category::new("Optics").display_label(), "Optics");
    }

    #[test]
    fn percent_format_is_one_decimal() {
        assert_eq!(ValueFormat::Percent.label(49.48), "49.5%");
        assert_eq!(ValueFormat::Percent.label(12.0), "12.0%");
    }

    #[test]
    fn signed_format_carries_explicit_sign() {
        assert_eq!(ValueFormat::SignedPercent.label(4.17), "+4.2%");
        assert_eq!(ValueFormat::SignedPercent.label(-3.69), "-3.7%");
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let spec = BarChartSpec {
            title: "t".into(),
            x_desc: None,
            y_desc: "y".into(),
            categories: vec![
                Category::new("a"),
                Category::new("b"),
                Category::new("c"),
            ],
            series: vec![Series::from_values("short", &[1.0, 2.0])],
            value_format: ValueFormat::Percent,
        };
        let err = spec.validate().unwrap_err();
        match err {
            ChartError::Input { series, got, expected } => {
                assert_eq!(series, "short");
                assert_eq!(got, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_absent_values() {
        let spec = BarChartSpec {
            title: "t".into(),
            x_desc: None,
            y_desc: "y".into(),
            categories: vec![Category::new("a")],
            series: vec![Series::new("s", vec![None])],
            value_format: ValueFormat::Percent,
        };
        assert!(spec.validate().is_ok());
    }
}
