//! SVG rendering with plotters.

use std::path::Path;

use plotters::prelude::*;

use super::chart::ChartSpec;
use super::Reporter;
use crate::error::{AnalyzeError, Result};

/// Draws line charts into SVG files.
#[derive(Debug, Clone, Copy)]
pub struct SvgReporter {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgReporter {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl SvgReporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(&self, chart: &ChartSpec, output: &Path) -> std::result::Result<(), String> {
        let root = SVGBackend::new(output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let last_x = chart.len().saturating_sub(1).max(1) as i32;
        let y_max = match chart.max_value() {
            v if v > 0.0 => v * 1.1,
            _ => 1.0,
        };

        let mut ctx = ChartBuilder::on(&root)
            .caption(chart.title.as_str(), ("sans-serif", 32).into_font())
            .margin(20)
            .x_label_area_size(160)
            .y_label_area_size(70)
            .build_cartesian_2d(0..last_x, 0.0..y_max)
            .map_err(|e| e.to_string())?;

        let labels = &chart.x_labels;
        let label_for = |x: &i32| -> String {
            usize::try_from(*x)
                .ok()
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_default()
        };
        ctx.configure_mesh()
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .x_labels(chart.len().max(2))
            .x_label_formatter(&label_for)
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .map_err(|e| e.to_string())?;

        for (i, (label, values)) in chart.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let points = values.iter().enumerate().map(|(x, y)| (x as i32, *y));
            ctx.draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(|e| e.to_string())?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Reporter for SvgReporter {
    fn render(&self, chart: &ChartSpec, output: &Path) -> Result<()> {
        self.draw(chart, output)
            .map_err(|message| AnalyzeError::Render {
                path: output.to_path_buf(),
                message,
            })
    }
}
