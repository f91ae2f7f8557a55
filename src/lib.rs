//! Histogram binning and pie chart layout
//!
//! Facade over the chart layout workspace:
//!
//! - [`common`]: shared errors, screen-space geometry and text metrics
//! - [`histogram`]: fixed-width binning into chart-ready axis data
//! - [`pie`]: wedge and annotation layout for pie charts
//! - `render` (feature `render`): plotters drawing of both
//!
//! Both engines are pure: the same inputs always give the same output, no
//! state is kept between calls, and nothing is drawn unless a renderer is
//! asked to.
//!
//! ```rust
//! use chart_layout::prelude::*;
//!
//! let hist = histogram_in_range(&[-9.0, -9.0, -1.0, 1.0, 9.0, 9.0], 10, -10.0, 10.0)?;
//! assert_eq!(hist.counts(), vec![2, 0, 0, 0, 1, 1, 0, 0, 0, 2]);
//!
//! let series = PieSeries::from_pairs([("A", 25.0), ("B", 75.0)])?;
//! let style = PieStyle::new().with_annotation(AnnotationType::Percentage);
//! let pie = layout(&series, &style, Rect::new(0.0, 0.0, 400.0, 300.0), &MonospaceMetrics::default())?;
//! assert_eq!(pie.slices()[0].annotation.as_ref().unwrap().text, "25.0%");
//! # Ok::<(), chart_layout::Error>(())
//! ```

pub use chart_core as common;
pub use chart_histogram as histogram;
pub use chart_pie as pie;

#[cfg(feature = "render")]
pub use chart_render as render;

pub use chart_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use chart_core::{
        polar_to_screen, Error, MonospaceMetrics, Point, Rect, Result, Segment, TextExtent,
        TextMetrics,
    };
    pub use chart_histogram::{
        histogram, histogram_in_range, AxisData, BinRange, FixedWidthBuilder, Histogram,
        HistogramBin, HistogramBuilder,
    };
    pub use chart_pie::{
        layout, AnnotationFit, AnnotationPlacement, AnnotationSide, AnnotationType, PieEntry,
        PieLayout, PieSeries, PieStyle, SliceLayout, WedgeGeometry,
    };
}
