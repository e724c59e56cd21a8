//! Static Chart Renderer
//! Draws a grouped bar chart with plotters and writes one PNG per call.
//!
//! Layout:
//! 1. Title caption centered at the top
//! 2. Plot area with a horizontal grid and category ticks
//! 3. Grouped bars with a value label past each bar end
//! 4. Legend box in the upper right

use std::path::Path;

use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::layout::ChartLayout;
use crate::chart::spec::{BarChartSpec, ChartError, ValueFormat};
use crate::chart::style::{ChartStyle, Rgb};

const BASELINE_COLOR: RGBColor = RGBColor(66, 66, 66);
const GRID_COLOR: RGBColor = RGBColor(189, 189, 189);
const LEGEND_BORDER: RGBColor = RGBColor(224, 224, 224);

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render `spec` as a PNG at `path` and return the computed layout.
    ///
    /// Validation and layout run before the drawing surface exists, and the
    /// path is only touched after the full frame has been drawn into memory,
    /// so a failure never leaves a partial file behind.
    pub fn render_png(
        spec: &BarChartSpec,
        style: &ChartStyle,
        path: impl AsRef<Path>,
    ) -> Result<ChartLayout, ChartError> {
        let layout = ChartLayout::compute(spec, style)?;

        let (width, height) = (style.width, style.height);
        let mut buf = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            Self::draw(&root, spec, style, &layout)?;
            root.present().map_err(draw_err)?;
        }

        let img = RgbImage::from_raw(width, height, buf)
            .ok_or_else(|| ChartError::Render("pixel buffer size mismatch".into()))?;
        img.save(path.as_ref())?;
        log::debug!(
            "wrote {} ({} bars, {}x{})",
            path.as_ref().display(),
            layout.bars.len(),
            width,
            height
        );
        Ok(layout)
    }

    fn draw(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        spec: &BarChartSpec,
        style: &ChartStyle,
        layout: &ChartLayout,
    ) -> Result<(), ChartError> {
        let family = style.font_family.as_str();
        root.fill(&to_color(style.background)).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (family, style.title_font_size as i32))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(
                layout.x_range.0..layout.x_range.1,
                layout.y_range.0..layout.y_range.1,
            )
            .map_err(draw_err)?;

        let tick_labels: Vec<String> = spec
            .categories
            .iter()
            .map(|c| c.display_label())
            .collect();
        // Show a tick label only at the integer category positions.
        let x_formatter = |x: &f64| -> String {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < tick_labels.len() {
                tick_labels[idx as usize].clone()
            } else {
                String::new()
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .light_line_style(&GRID_COLOR.mix(0.2))
            .y_desc(spec.y_desc.as_str())
            .axis_desc_style((family, style.axis_font_size as i32))
            .label_style((family, style.tick_font_size as i32))
            .x_labels(spec.categories.len() + 1)
            .x_label_formatter(&x_formatter);
        if let Some(x_desc) = &spec.x_desc {
            mesh.x_desc(x_desc.as_str());
        }
        mesh.draw().map_err(draw_err)?;

        let half = layout.bar_width / 2.0;
        for (si, series) in spec.series.iter().enumerate() {
            let color = to_color(style.series_color(si));
            let fill = color.mix(style.bar_alpha).filled();
            chart
                .draw_series(
                    layout
                        .bars
                        .iter()
                        .filter(|b| b.series_index == si)
                        .map(|b| Rectangle::new([(b.x - half, 0.0), (b.x + half, b.value)], fill)),
                )
                .map_err(draw_err)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled())
                });
        }

        if layout.has_negative {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(layout.x_range.0, 0.0), (layout.x_range.1, 0.0)],
                    BASELINE_COLOR.stroke_width(2),
                )))
                .map_err(draw_err)?;
        }

        let gap = layout.label_offset();
        for bar in &layout.bars {
            // Delta charts color each label like its series; plain charts use
            // a neutral gray.
            let color = match spec.value_format {
                ValueFormat::SignedPercent => to_color(style.series_color(bar.series_index)),
                ValueFormat::Percent => BASELINE_COLOR,
            };
            let (y, v_pos) = if bar.label_above {
                (bar.value + gap, VPos::Bottom)
            } else {
                (bar.value - gap, VPos::Top)
            };
            let label_style = (family, style.value_font_size as i32)
                .into_font()
                .color(&color)
                .pos(Pos::new(HPos::Center, v_pos));
            chart
                .draw_series(std::iter::once(Text::new(
                    bar.label.clone(),
                    (bar.x, y),
                    label_style,
                )))
                .map_err(draw_err)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.95))
            .border_style(&LEGEND_BORDER)
            .label_font((family, style.tick_font_size as i32))
            .draw()
            .map_err(draw_err)?;

        Ok(())
    }
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn draw_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}
