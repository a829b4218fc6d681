use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::domain::histogram::Histogram;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders trial outcomes as a bar chart PNG. Nothing is written for an empty histogram.
pub fn write_histogram_png<P: AsRef<Path>>(
    output_path: P,
    histogram: &Histogram,
    caption: &str,
    x_desc: &str,
) -> Result<(), HistogramError> {
    let (Some(min_outcome), Some(max_outcome)) = (histogram.min_outcome(), histogram.max_outcome())
    else {
        return Ok(());
    };
    let max_count = histogram.iter().map(|(_, count)| count).max().unwrap_or(1);

    let root = BitMapBackend::new(output_path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let x_range = min_outcome.saturating_sub(1)..(max_outcome + 2);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc("Trials")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(histogram.iter().map(|(outcome, count)| {
            Rectangle::new([(outcome, 0), (outcome + 1, count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
