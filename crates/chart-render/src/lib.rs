//! Plotters rendering for chart layouts
//!
//! The layout crates compute geometry only. This crate is the downstream
//! consumer that turns that geometry into draw calls on a
//! [`plotters`] drawing area, and supplies a [`FontMetrics`] provider so
//! layout measures text with the font it will be drawn in.

pub mod histogram;
pub mod metrics;
pub mod pie;

pub use histogram::{draw_histogram, render_histogram_svg};
pub use metrics::FontMetrics;
pub use pie::{draw_pie, render_pie_svg, PieTheme};

use chart_core::{Error, Point};
use plotters::drawing::DrawingAreaErrorKind;

/// Round a layout point onto the backend pixel grid
pub(crate) fn to_backend(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

pub(crate) fn render_err<E>(err: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Render(err.to_string())
}
