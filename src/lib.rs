//! benchplot - Static benchmark bar-chart generator
//!
//! Turns typed benchmark result tables into grouped bar-chart PNGs with
//! value-labeled bars, a legend and a grid. Rendering is a single synchronous
//! compute-then-write operation per chart.

pub mod chart;
pub mod report;
