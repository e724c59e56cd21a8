//! Benchmark Report Data
//! Literal result tables from the PhysBench web-search evaluation, expressed
//! as typed chart specs so the renderer can be exercised with synthetic data
//! in tests.

use crate::chart::{tint, BarChartSpec, Category, ChartStyle, Rgb, Series, ValueFormat};

const PINK: Rgb = (233, 30, 99);
const BLUE_PURPLE: Rgb = (92, 107, 192);
const TEAL: Rgb = (38, 166, 154);

/// Every report chart with its output file name and style.
pub fn charts() -> Vec<(&'static str, BarChartSpec, ChartStyle)> {
    let mut charts = vec![
        (
            "web_search_impact.png",
            search_impact_chart(),
            ChartStyle::default(),
        ),
        (
            "model_performance_comparison.png",
            benchmark_comparison_chart(),
            ChartStyle {
                width: 1200,
                height: 800,
                ..ChartStyle::default()
            },
        ),
    ];
    charts.extend(subject_breakdown_charts());
    charts
}

/// Per-subject accuracy change when built-in web search is enabled.
pub fn search_impact_chart() -> BarChartSpec {
    BarChartSpec {
        title: "Impact of Augmenting Built-in Web Search Tools on Model Performance on PhysBench"
            .into(),
        x_desc: Some("Subject Area (Number of Questions)".into()),
        y_desc: "Performance Change (%)".into(),
        categories: vec![
            Category::with_samples("Electromagnetism", 245),
            Category::with_samples("Mechanics", 321),
            Category::with_samples("Optics", 97),
            Category::with_samples("Relativity", 24),
            Category::with_samples("Thermodynamics", 152),
        ],
        series: vec![
            Series::from_values("Gemini 2.5 Pro", &[-4.08, -3.69, -10.30, 4.17, -2.63]),
            Series::from_values("GPT-4.1 (CoT)", &[-1.03, 3.11, -4.88, -8.33, -7.78]),
            Series::from_values("GPT-4.1-mini (CoT)", &[-12.77, -8.34, -1.18, -29.16, -11.68]),
        ],
        value_format: ValueFormat::SignedPercent,
    }
}

/// Toolless vs web-search accuracy, one chart per subject.
pub fn subject_breakdown_charts() -> Vec<(&'static str, BarChartSpec, ChartStyle)> {
    vec![
        (
            "electro_performance.png",
            subject_chart(
                "Electromagnetism",
                245,
                &[46.94, 24.08, 24.90],
                &[Some(42.86), Some(23.05), Some(12.13)],
            ),
            subject_style(PINK),
        ),
        (
            "optics_performance.png",
            subject_chart(
                "Optics",
                97,
                &[49.48, 18.56, 13.40],
                &[Some(39.18), Some(13.68), Some(12.22)],
            ),
            subject_style(BLUE_PURPLE),
        ),
        (
            "thermo_performance.png",
            subject_chart(
                "Thermodynamics",
                152,
                &[48.68, 25.00, 23.68],
                &[Some(46.05), Some(17.22), Some(12.00)],
            ),
            subject_style(TEAL),
        ),
    ]
}

/// OlympiadBench vs PhysBench overall accuracy per model.
pub fn benchmark_comparison_chart() -> BarChartSpec {
    BarChartSpec {
        title: "Model Performance Comparison: OlympiadBench vs PhysBench".into(),
        x_desc: None,
        y_desc: "Overall Accuracy (%)".into(),
        categories: vec![
            Category::new("GPT-4.1 (CoT)"),
            Category::new("GPT-5 (Minimal Reasoning)"),
            Category::new("Gemini 2.5 Pro"),
        ],
        series: vec![
            Series::from_values("OlympiadBench (463 questions)", &[44.06, 50.76, 65.01]),
            Series::from_values("PhysBench (843 questions)", &[23.84, 29.18, 49.23]),
        ],
        value_format: ValueFormat::Percent,
    }
}

fn subject_chart(
    subject: &str,
    questions: u32,
    no_tools: &[f64; 3],
    with_search: &[Option<f64>; 3],
) -> BarChartSpec {
    BarChartSpec {
        title: format!("{subject} Performance: Toolless vs Web Search ({questions} questions)"),
        x_desc: None,
        y_desc: "Performance (%)".into(),
        categories: vec![
            Category::new("Gemini 2.5 Pro"),
            Category::new("GPT-4.1 (CoT)"),
            Category::new("GPT-4.1-mini (CoT)"),
        ],
        series: vec![
            Series::from_values("No Tools", no_tools),
            Series::new("With Web Search", with_search.to_vec()),
        ],
        value_format: ValueFormat::Percent,
    }
}

/// Both series of a subject chart share that subject's hue; the web-search
/// series gets a lighter tint of it.
fn subject_style(color: Rgb) -> ChartStyle {
    ChartStyle {
        width: 1000,
        height: 600,
        palette: vec![color, tint(color, 0.55)],
        ..ChartStyle::default()
    }
}
