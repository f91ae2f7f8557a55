//! Pie chart layout
//!
//! Converts an ordered series of named values into concrete screen-space
//! geometry: one wedge per entry plus a placement decision for its
//! annotation. Nothing is drawn here; a renderer consumes the
//! [`PieLayout`].
//!
//! # Pipeline
//!
//! 1. Plot areas narrower than [`MIN_PLOT_WIDTH`] yield an empty layout.
//! 2. The pie box is the (optionally square) plot area shrunk to
//!    `fill_fraction` and centered.
//! 3. Wedges start at `start_angle_degrees + 90` and sweep
//!    `value / total * 360` each, in input order.
//! 4. Annotation text is placed along each wedge bisector at
//!    `annotation_distance` times the radius, then tested against the
//!    wedge's chord span at that radius ([`AnnotationFit`]).
//! 5. Fitting annotations placed outside the pie get a leader line.
//!
//! # Example
//!
//! ```rust
//! use chart_core::{MonospaceMetrics, Rect};
//! use chart_pie::{layout, AnnotationType, PieSeries, PieStyle};
//!
//! let series = PieSeries::from_pairs([("Gold", 24.0), ("Silver", 21.0), ("Bronze", 39.0)])?;
//! let style = PieStyle::new()
//!     .with_annotation(AnnotationType::LabelAndPercentage)
//!     .with_annotation_distance(1.15);
//!
//! let pie = layout(&series, &style, Rect::new(0.0, 0.0, 800.0, 600.0), &MonospaceMetrics::default())?;
//!
//! for slice in pie.slices() {
//!     let note = slice.annotation.as_ref().unwrap();
//!     println!("{} sweeps {:.1} degrees, label '{}' fits: {}",
//!              slice.name, slice.wedge.sweep_angle, note.text, note.fits());
//! }
//! # Ok::<(), chart_core::Error>(())
//! ```

pub mod annotation;
pub mod config;
pub mod layout;
pub mod types;
pub mod wedge;

pub use annotation::{AnnotationFit, AnnotationPlacement, AnnotationSide};
pub use config::{AnnotationType, PieStyle};
pub use layout::{layout, pie_bounds, PieLayout, SliceLayout, MIN_PLOT_WIDTH};
pub use types::{PieEntry, PieSeries};
pub use wedge::WedgeGeometry;

pub use chart_core::{Error, Result};
