//! Pie rendering

use crate::metrics::FontMetrics;
use crate::{render_err, to_backend};
use chart_core::{Rect, Result};
use chart_pie::{layout, PieLayout, PieSeries, PieStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Palette, Palette99};
use tracing::debug;

/// Colors and strokes used to draw a pie
#[derive(Clone)]
pub struct PieTheme {
    /// Slice fills, cycled in order
    pub colors: Vec<RGBColor>,
    pub background: RGBColor,
    pub text_color: RGBColor,
    pub leader_width: u32,
    /// Largest angle between two rim vertices of a wedge polygon
    pub arc_step_degrees: f64,
    pub metrics: FontMetrics,
}

impl Default for PieTheme {
    fn default() -> Self {
        Self {
            colors: Palette99::COLORS
                .iter()
                .map(|&(r, g, b)| RGBColor(r, g, b))
                .collect(),
            background: WHITE,
            text_color: BLACK,
            leader_width: 2,
            arc_step_degrees: 2.0,
            metrics: FontMetrics::default(),
        }
    }
}

impl PieTheme {
    fn color(&self, index: usize) -> RGBColor {
        if self.colors.is_empty() {
            BLACK
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

/// Draw a laid-out pie
///
/// Each wedge is filled and outlined in the background color. Annotations
/// are drawn only when they fit, together with their leader line.
pub fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    pie: &PieLayout,
    theme: &PieTheme,
) -> Result<()> {
    for (i, slice) in pie.iter().enumerate() {
        let mut points: Vec<(i32, i32)> = slice
            .wedge
            .outline(theme.arc_step_degrees)
            .into_iter()
            .map(to_backend)
            .collect();

        area.draw(&Polygon::new(points.clone(), theme.color(i).filled()))
            .map_err(render_err)?;
        if let Some(&first) = points.first() {
            points.push(first);
        }
        area.draw(&PathElement::new(points, theme.background.stroke_width(1)))
            .map_err(render_err)?;

        let Some(note) = slice.annotation.as_ref() else {
            continue;
        };
        if !note.fits() {
            debug!("Skipping annotation for '{}': does not fit", slice.name);
            continue;
        }
        if let Some(leader) = note.leader {
            area.draw(&PathElement::new(
                vec![to_backend(leader.start), to_backend(leader.end)],
                theme.text_color.stroke_width(theme.leader_width),
            ))
            .map_err(render_err)?;
        }
        let style = TextStyle::from(theme.metrics.font().clone())
            .color(&theme.text_color)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        area.draw(&Text::new(note.text.clone(), to_backend(note.anchor), style))
            .map_err(render_err)?;
    }
    Ok(())
}

/// Lay out `series` over a `size` canvas and render it as SVG
pub fn render_pie_svg(
    series: &PieSeries,
    style: &PieStyle,
    size: (u32, u32),
    theme: &PieTheme,
) -> Result<String> {
    let bounds = Rect::new(0.0, 0.0, size.0 as f64, size.1 as f64);
    let pie = layout(series, style, bounds, &theme.metrics)?;

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        root.fill(&theme.background).map_err(render_err)?;
        draw_pie(&root, &pie, theme)?;
        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}
