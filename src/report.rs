//! Chart output.
//!
//! - [`ChartSpec`]: what to draw, built from an aggregate
//! - [`Reporter`]: draws a chart to a path ([`SvgReporter`] writes SVG)
//! - [`ChartRequest`] / [`OutputTargets`]: which charts go where, checked for
//!   clashing paths before any work starts

mod chart;
mod output;
mod svg;

pub use chart::ChartSpec;
pub use output::{validate_outputs, ChartKind, ChartRequest, OutputTargets};
pub use svg::SvgReporter;

use std::path::Path;

use crate::error::Result;

/// Renders a chart into an image file.
pub trait Reporter {
    fn render(&self, chart: &ChartSpec, output: &Path) -> Result<()>;

    /// Render `chart` to every path in `targets`.
    fn render_all(&self, chart: &ChartSpec, targets: &OutputTargets) -> Result<()> {
        for path in targets.paths() {
            self.render(chart, path)?;
            tracing::info!("Wrote {}", path.display());
        }
        Ok(())
    }
}
