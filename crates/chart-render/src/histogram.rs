//! Histogram rendering

use crate::render_err;
use chart_core::Result;
use chart_histogram::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Draw `histogram` as a bar chart filling `area`
pub fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
    caption: Option<&str>,
) -> Result<()> {
    if histogram.is_empty() {
        return Ok(());
    }

    let (min, max) = (histogram.min(), histogram.max());
    // A zero-width range still needs a non-empty axis
    let x_range = if max > min {
        min..max
    } else {
        (min - 0.5)..(max + 0.5)
    };
    let y_max = histogram.max_count().max(1) as f64 * 1.1;

    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(30).y_label_area_size(40);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(x_range, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(histogram.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(render_err)?;

    Ok(())
}

/// Render `histogram` as an SVG document of the given size
pub fn render_histogram_svg(
    histogram: &Histogram,
    size: (u32, u32),
    caption: Option<&str>,
) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        draw_histogram(&root, histogram, caption)?;
        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}
