//! Report module - PhysBench evaluation charts

mod benchmarks;

pub use benchmarks::{
    benchmark_comparison_chart, charts, search_impact_chart, subject_breakdown_charts,
};
