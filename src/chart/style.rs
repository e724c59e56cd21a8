//! Chart Style Module
//! Explicit styling passed into each render call; no global plot state.

use serde::{Deserialize, Serialize};

pub type Rgb = (u8, u8, u8);

/// Default series palette
pub const PALETTE: [Rgb; 6] = [
    (233, 30, 99),  // Pink
    (92, 107, 192), // Blue-purple
    (38, 166, 154), // Teal
    (243, 156, 18), // Orange
    (155, 89, 182), // Purple
    (96, 125, 139), // Blue Grey
];

/// Blend a color toward white. `amount` is clamped to 0..1;
/// 0 returns the color unchanged, 1 returns white.
pub fn tint(rgb: Rgb, amount: f64) -> Rgb {
    let amount = amount.clamp(0.0, 1.0);
    let blend = |c: u8| (c as f64 + (255.0 - c as f64) * amount).round() as u8;
    (blend(rgb.0), blend(rgb.1), blend(rgb.2))
}

/// Display options for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// One fill color per series, cycled when there are more series.
    pub palette: Vec<Rgb>,
    /// Fraction of each category slot occupied by the bar group.
    pub group_width: f64,
    pub bar_alpha: f64,
    pub font_family: String,
    pub title_font_size: u32,
    pub axis_font_size: u32,
    pub tick_font_size: u32,
    pub value_font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            background: (255, 255, 255),
            palette: PALETTE.to_vec(),
            group_width: 0.75,
            bar_alpha: 0.85,
            font_family: "sans-serif".into(),
            title_font_size: 32,
            axis_font_size: 26,
            tick_font_size: 20,
            value_font_size: 17,
        }
    }
}

impl ChartStyle {
    /// Fill color for the series at `index`, cycling the palette.
    pub fn series_color(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            PALETTE[index % PALETTE.len()]
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}
