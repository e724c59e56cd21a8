//! Chart Layout Module
//! Deterministic bar geometry, computed before any pixels are drawn.
//!
//! Separating geometry from drawing keeps bar positions, heights and label
//! strings unit-testable without decoding a PNG.

use serde::{Deserialize, Serialize};

use crate::chart::spec::{BarChartSpec, ChartError};
use crate::chart::style::ChartStyle;

/// Headroom added past the extreme values, as a fraction of the value span.
const HEADROOM: f64 = 0.15;

/// One rendered bar: a (category, series) pair with a present value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub category: String,
    pub series: String,
    pub series_index: usize,
    /// Bar center on the category axis.
    pub x: f64,
    pub value: f64,
    /// Formatted value label text.
    pub label: String,
    /// Label sits past the bar end, away from the zero baseline.
    pub label_above: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub bar_width: f64,
    pub has_negative: bool,
    pub bars: Vec<BarLayout>,
}

impl ChartLayout {
    /// Validate the spec and place every present value.
    ///
    /// Categories occupy integer tick positions 0..n-1; the bars of one group
    /// are offset symmetrically around the tick so they never overlap. Absent
    /// values produce no bar entry.
    pub fn compute(spec: &BarChartSpec, style: &ChartStyle) -> Result<Self, ChartError> {
        spec.validate()?;

        let n_series = spec.series.len();
        let bar_width = style.group_width / n_series.max(1) as f64;

        let mut bars = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (si, series) in spec.series.iter().enumerate() {
            let offset = (si as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
            for (ci, value) in series.values.iter().enumerate() {
                let Some(v) = *value else { continue };
                min = min.min(v);
                max = max.max(v);
                bars.push(BarLayout {
                    category: spec.categories[ci].label.clone(),
                    series: series.name.clone(),
                    series_index: si,
                    x: ci as f64 + offset,
                    value: v,
                    label: spec.value_format.label(v),
                    label_above: v >= 0.0,
                });
            }
        }

        let (y_min, y_max) = Self::y_range(min, max);
        Ok(Self {
            x_range: (-0.5, spec.categories.len().max(1) as f64 - 0.5),
            y_range: (y_min, y_max),
            bar_width,
            has_negative: min.is_finite() && min < 0.0,
            bars,
        })
    }

    /// Value range including the zero baseline, with headroom past the
    /// extremes. A chart with no present values falls back to 0..100.
    fn y_range(min: f64, max: f64) -> (f64, f64) {
        if min.is_infinite() {
            return (0.0, 100.0);
        }
        let min = min.min(0.0);
        let max = max.max(0.0);
        let pad = (max - min).max(1.0) * HEADROOM;
        let lo = if min < 0.0 { min - pad } else { 0.0 };
        (lo, max + pad)
    }

    /// Gap in value units between a bar end and its label anchor.
    pub fn label_offset(&self) -> f64 {
        (self.y_range.1 - self.y_range.0) * 0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{BarChartSpec, Category, Series, ValueFormat};

    fn spec(series: Vec<Series>) -> BarChartSpec {
        let n = series.first().map(|s| s.values.len()).unwrap_or(0);
        BarChartSpec {
            title: "t".into(),
            x_desc: None,
            y_desc: "y".into(),
            categories: (0..n).map(|i| Category::new(format!("c{i}"))).collect(),
            series,
            value_format: ValueFormat::Percent,
        }
    }

    #[test]
    fn bar_count_is_cells_minus_absent() {
        let s = spec(vec![
            Series::new("a", vec![Some(1.0), Some(2.0), None]),
            Series::new("b", vec![Some(3.0), None, Some(5.0)]),
        ]);
        let layout = ChartLayout::compute(&s, &ChartStyle::default()).unwrap();
        assert_eq!(layout.bars.len(), 4);
    }

    #[test]
    fn single_cell_renders_one_labeled_bar() {
        let s = spec(vec![Series::from_values("only", &[42.0])]);
        let layout = ChartLayout::compute(&s, &ChartStyle::default()).unwrap();
        assert_eq!(layout.bars.len(), 1);
        assert_eq!(layout.bars[0].x, 0.0);
        assert_eq!(layout.bars[0].label, "42.0%");
    }

    #[test]
    fn groups_are_centered_on_the_tick() {
        let s = spec(vec![
            Series::from_values("a", &[1.0, 2.0]),
            Series::from_values("b", &[3.0, 4.0]),
        ]);
        let style = ChartStyle::default();
        let layout = ChartLayout::compute(&s, &style).unwrap();
        let half = layout.bar_width / 2.0;

        // Two series: offsets are +/- half a bar width around the tick.
        let at = |series: &str, category: &str| {
            layout
                .bars
                .iter()
                .find(|b| b.series == series && b.category == category)
                .unwrap()
                .x
        };
        assert!((at("a", "c0") - (0.0 - half)).abs() < 1e-12);
        assert!((at("b", "c0") - (0.0 + half)).abs() < 1e-12);
        assert!((at("a", "c1") - (1.0 - half)).abs() < 1e-12);

        // Neighboring bars touch but never overlap.
        assert!((at("b", "c0") - at("a", "c0") - layout.bar_width).abs() < 1e-12);
    }

    #[test]
    fn negative_values_label_below_and_keep_baseline_visible() {
        let s = spec(vec![Series::from_values("delta", &[-4.08, 4.17])]);
        let layout = ChartLayout::compute(&s, &ChartStyle::default()).unwrap();
        assert!(layout.has_negative);
        assert!(layout.y_range.0 < -4.08);
        assert!(layout.y_range.1 > 4.17);
        let below: Vec<bool> = layout.bars.iter().map(|b| b.label_above).collect();
        assert_eq!(below, vec![false, true]);
    }

    #[test]
    fn all_positive_chart_starts_at_zero() {
        let s = spec(vec![Series::from_values("acc", &[46.94, 24.08])]);
        let layout = ChartLayout::compute(&s, &ChartStyle::default()).unwrap();
        assert_eq!(layout.y_range.0, 0.0);
        assert!(layout.y_range.1 > 46.94);
    }

    #[test]
    fn all_absent_falls_back_to_default_range() {
        let s = spec(vec![Series::new("empty", vec![None, None])]);
        let layout = ChartLayout::compute(&s, &ChartStyle::default()).unwrap();
        assert!(layout.bars.is_empty());
        assert_eq!(layout.y_range, (0.0, 100.0));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut s = spec(vec![Series::from_values("a", &[1.0, 2.0])]);
        s.series.push(Series::from_values("b", &[1.0]));
        assert!(ChartLayout::compute(&s, &ChartStyle::default()).is_err());
    }

    #[test]
    fn layout_is_deterministic() {
        let s = spec(vec![
            Series::new("a", vec![Some(49.48), None]),
            Series::from_values("b", &[18.56, 13.40]),
        ]);
        let style = ChartStyle::default();
        let first = ChartLayout::compute(&s, &style).unwrap();
        let second = ChartLayout::compute(&s, &style).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
