//! Charts module - bar chart spec, layout and rendering

mod layout;
mod renderer;
mod spec;
mod style;

pub use layout::{BarLayout, ChartLayout};
pub use renderer::ChartRenderer;
pub use spec::{BarChartSpec, Category, ChartError, Series, ValueFormat};
pub use style::{tint, ChartStyle, Rgb, PALETTE};
