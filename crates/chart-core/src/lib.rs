//! Core types shared by the chart layout crates
//!
//! This crate holds the pieces every layout engine needs and nothing else:
//!
//! - [`Error`] / [`Result`]: the error type used across all chart-* crates
//! - [`geometry`]: screen-space points, rectangles, segments and the single
//!   polar projection helper that fixes the y-down sign convention
//! - [`metrics`]: the [`TextMetrics`] seam through which layout code asks a
//!   font backend how large a string will be
//!
//! # Example
//!
//! ```rust
//! use chart_core::{polar_to_screen, MonospaceMetrics, Point, TextMetrics};
//!
//! let top = polar_to_screen(Point::new(50.0, 50.0), 10.0, 10.0, 90.0);
//! assert!((top.y - 40.0).abs() < 1e-9);
//!
//! let metrics = MonospaceMetrics::default();
//! let extent = metrics.measure("Berlin").unwrap();
//! assert_eq!(extent.width, 42.0);
//! ```

pub mod error;
pub mod geometry;
pub mod metrics;

pub use error::{Error, Result};
pub use geometry::{polar_to_screen, Point, Rect, Segment};
pub use metrics::{MonospaceMetrics, TextExtent, TextMetrics};
