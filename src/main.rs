//! benchplot - Static benchmark bar-chart generator
//!
//! Renders the PhysBench web-search comparison charts to PNG files.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use benchplot::chart::ChartRenderer;
use benchplot::report;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("charts"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for (file, spec, style) in report::charts() {
        let path = out_dir.join(file);
        let layout = ChartRenderer::render_png(&spec, &style, &path)
            .with_context(|| format!("failed to render {file}"))?;
        log::info!("wrote {} ({} bars)", path.display(), layout.bars.len());
    }

    Ok(())
}
